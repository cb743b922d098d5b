//! The 教室信息 cell packs the schedule, the room and the exam details of a
//! class into one free-text blob. Each line goes through a set of
//! independent matchers whose partial results are folded in line order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::timetable::{self, Schedule};

/// Building abbreviations and their full names
const BUILDINGS: &[(&str, &str)] = &[
    ("理教", "理科教学楼"),
    ("地学", "地学"),
    ("二教", "第二教学楼"),
    ("三教", "第三教学楼"),
];

/// Boilerplate exam mode sentence
const EXAM_MODE: &str = "堂考、论文、或统一时间考试";

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    let buildings = BUILDINGS
        .iter()
        .map(|(code, _)| *code)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?P<building>{buildings})(?P<room>\d+)"))
        .expect("location pattern is valid")
});

static EXAM_MODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^考试方式：{EXAM_MODE}$")).expect("exam mode pattern is valid")
});

static EXAM_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^考试时间：(?P<time>[^;；]*)[;；]?$").expect("exam time pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExamInfo {
    /// How the exam is held, e.g. `堂考、论文、或统一时间考试`
    Mode(String),
    /// When the exam is held, as written by the portal, e.g. `20240105下午`
    Time { time: String },
}

/// Everything recovered from an info blob
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoFields {
    pub location: Option<String>,
    pub exam_info: Option<ExamInfo>,
    pub schedules: Vec<Schedule>,
}

impl InfoFields {
    /// Fold a later update into `self`, later values win
    #[must_use]
    pub fn merge(mut self, update: Self) -> Self {
        if update.location.is_some() {
            self.location = update.location;
        }
        if update.exam_info.is_some() {
            self.exam_info = update.exam_info;
        }
        self.schedules.extend(update.schedules);
        self
    }
}

type Matcher = fn(&str) -> InfoFields;

/// Applied to every line, in this order
const MATCHERS: [Matcher; 4] = [schedule, location, exam_mode, exam_time];

fn schedule(line: &str) -> InfoFields {
    InfoFields {
        schedules: timetable::parse_line(line).into_iter().collect(),
        ..InfoFields::default()
    }
}

/// `理教101` => `理科教学楼 101`
fn location(line: &str) -> InfoFields {
    let location = LOCATION_RE.captures(line).and_then(|captures| {
        BUILDINGS
            .iter()
            .find(|(code, _)| *code == &captures["building"])
            .map(|(_, building)| format!("{building} {}", &captures["room"]))
    });

    InfoFields {
        location,
        ..InfoFields::default()
    }
}

fn exam_mode(line: &str) -> InfoFields {
    InfoFields {
        exam_info: EXAM_MODE_RE
            .is_match(line)
            .then(|| ExamInfo::Mode(EXAM_MODE.to_owned())),
        ..InfoFields::default()
    }
}

/// `考试时间：20240105下午；` => `20240105下午`
fn exam_time(line: &str) -> InfoFields {
    InfoFields {
        exam_info: EXAM_TIME_RE.captures(line).map(|captures| ExamInfo::Time {
            time: captures["time"].to_owned(),
        }),
        ..InfoFields::default()
    }
}

/// Decompose a multi-line info blob, lines end at `\n`, `\r\n` or a lone `\r`
pub fn decompose(info: &str) -> InfoFields {
    info.split(['\r', '\n'])
        .map(str::trim)
        .flat_map(|line| MATCHERS.iter().map(move |matcher| matcher(line)))
        .fold(InfoFields::default(), InfoFields::merge)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::timetable::Parity;

    #[test]
    fn location_and_exam_mode() {
        assert_eq!(
            decompose("理教101\n考试方式：堂考、论文、或统一时间考试"),
            InfoFields {
                location: Some("理科教学楼 101".to_owned()),
                exam_info: Some(ExamInfo::Mode("堂考、论文、或统一时间考试".to_owned())),
                schedules: vec![],
            }
        );
    }

    #[test]
    fn exam_time_line() {
        assert_eq!(
            decompose("考试时间：20240105下午；").exam_info,
            Some(ExamInfo::Time {
                time: "20240105下午".to_owned()
            })
        );
        assert_eq!(
            decompose("考试时间：20240105上午").exam_info,
            Some(ExamInfo::Time {
                time: "20240105上午".to_owned()
            })
        );
    }

    #[test]
    fn last_exam_line_wins() {
        let info = decompose("考试时间：20240105下午；\n考试方式：堂考、论文、或统一时间考试");
        assert_eq!(
            info.exam_info,
            Some(ExamInfo::Mode(EXAM_MODE.to_owned()))
        );

        let info = decompose("考试方式：堂考、论文、或统一时间考试\n考试时间：20240110晚上;");
        assert_eq!(
            info.exam_info,
            Some(ExamInfo::Time {
                time: "20240110晚上".to_owned()
            })
        );
    }

    #[test]
    fn buildings() {
        assert_eq!(decompose("地学203").location.as_deref(), Some("地学 203"));
        assert_eq!(decompose("三教210").location.as_deref(), Some("第三教学楼 210"));
        assert_eq!(decompose("四教101").location, None);
    }

    #[test]
    fn schedule_lines_are_collected() {
        let info = decompose("1-16周 每周周五10~11节 理教107\n单周周一1~2节\n备注：无");
        assert_eq!(info.location.as_deref(), Some("理科教学楼 107"));
        assert_eq!(info.schedules.len(), 2);
        assert_eq!(info.schedules[0].weekday(), Weekday::Fri);
        assert_eq!(info.schedules[1].parity(), Parity::Odd);
    }

    #[test]
    fn carriage_return_ends_a_line() {
        let info = decompose("理教101\r考试时间：20240105下午；\r\n单周周一1~2节");
        assert_eq!(info.location.as_deref(), Some("理科教学楼 101"));
        assert_eq!(
            info.exam_info,
            Some(ExamInfo::Time {
                time: "20240105下午".to_owned()
            })
        );
        assert_eq!(info.schedules.len(), 1);
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(decompose(""), InfoFields::default());
        assert_eq!(decompose("备注：无\n\n  "), InfoFields::default());
        // Exam mode must be the whole line
        assert_eq!(decompose("考试方式：堂考、论文、或统一时间考试。").exam_info, None);
    }
}
