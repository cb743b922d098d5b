use std::fmt;

use chrono::{Datelike, Local, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub mod models;

pub use models::{Parity, Schedule};

/// Start and end of every period of the day, as (hour, minute)
pub const PERIODS: [((u32, u32), (u32, u32)); 11] = [
    ((8, 0), (8, 50)),
    ((9, 0), (9, 50)),
    ((10, 10), (11, 0)),
    ((11, 10), (12, 0)),
    ((13, 0), (13, 50)),
    ((14, 0), (14, 50)),
    ((15, 10), (16, 0)),
    ((16, 10), (17, 0)),
    ((17, 10), (18, 0)),
    ((18, 40), (19, 30)),
    ((19, 40), (20, 30)),
];

/// Day names accepted by the portal, both languages
const WEEKDAYS: &[(&str, Weekday)] = &[
    ("一", Weekday::Mon),
    ("Mon", Weekday::Mon),
    ("二", Weekday::Tue),
    ("Tue", Weekday::Tue),
    ("三", Weekday::Wed),
    ("Wed", Weekday::Wed),
    ("四", Weekday::Thu),
    ("Thu", Weekday::Thu),
    ("五", Weekday::Fri),
    ("Fri", Weekday::Fri),
    ("六", Weekday::Sat),
    ("Sat", Weekday::Sat),
    ("日", Weekday::Sun),
    ("Sun", Weekday::Sun),
];

const PARITIES: &[(&str, Parity)] = &[
    ("每", Parity::Every),
    ("单", Parity::Odd),
    ("双", Parity::Even),
];

/// Chinese name of each day, Monday first
const DAY_NAMES: [char; 7] = ['一', '二', '三', '四', '五', '六', '日'];

// p => week parity | d => day
// from => first period | to => last period
static SCHEDULE_RE: Lazy<Regex> = Lazy::new(|| {
    let days = WEEKDAYS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?P<p>[单双每])周周(?P<d>{days})(?P<from>[0-9]+)~(?P<to>[0-9]+)节"
    ))
    .expect("schedule pattern is valid")
});

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Parse one line like `每周周五10~11节`.
///
/// Periods are 1-based in the source and 0-based in the result. Returns
/// `None` when the line does not describe a schedule, which includes period
/// ranges that are reversed or fall outside [`PERIODS`].
pub fn parse_line(line: &str) -> Option<Schedule> {
    let captures = SCHEDULE_RE.captures(line.trim())?;

    let parity = lookup(PARITIES, &captures["p"])?;
    let weekday = lookup(WEEKDAYS, &captures["d"])?;

    let period = |name: &str| {
        captures[name]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
    };
    let (Some(start), Some(end)) = (period("from"), period("to")) else {
        debug!(line, "Period number out of range");
        return None;
    };
    if start > end || end >= PERIODS.len() {
        debug!(line, start, end, "Inconsistent period range");
        return None;
    }

    Some(Schedule {
        weekday,
        duration: (start, end),
        parity,
    })
}

impl Schedule {
    /// Wall-clock time the first period starts
    pub fn start_time(&self) -> Option<NaiveTime> {
        let (h, m) = PERIODS.get(self.duration.0)?.0;
        NaiveTime::from_hms_opt(h, m, 0)
    }

    /// Wall-clock time the last period ends
    pub fn end_time(&self) -> Option<NaiveTime> {
        let (h, m) = PERIODS.get(self.duration.1)?.1;
        NaiveTime::from_hms_opt(h, m, 0)
    }

    pub fn is_on(&self, day: Weekday) -> bool {
        self.weekday == day
    }

    /// True when the slot falls on the current local weekday
    pub fn is_today(&self) -> bool {
        self.is_on(Local::now().weekday())
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "星期{} 第 {}-{} 节",
            DAY_NAMES[self.weekday.num_days_from_monday() as usize],
            self.duration.0 + 1,
            self.duration.1 + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_week() {
        assert_eq!(
            parse_line("每周周五10~11节"),
            Some(Schedule {
                weekday: Weekday::Fri,
                duration: (9, 10),
                parity: Parity::Every,
            })
        );
    }

    #[test]
    fn english_day_and_parity() {
        let odd = parse_line("  单周周Mon1~2节  ").unwrap();
        assert_eq!(odd.weekday_index(), 0);
        assert_eq!(odd.duration(), (0, 1));
        assert_eq!(odd.parity().code(), 1);

        let even = parse_line("双周周日3~4节(理教101)").unwrap();
        assert_eq!(even.weekday_index(), 6);
        assert_eq!(even.parity(), Parity::Even);
    }

    #[test]
    fn garbage_is_not_a_schedule() {
        assert_eq!(parse_line("complete garbage"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("每周周八1~2节"), None);
        assert_eq!(parse_line("隔周周一1~2节"), None);
    }

    // The portal never emits these, but they would break the period index
    // invariant, so they are rejected instead of passed through.
    #[test]
    fn rejects_impossible_periods() {
        assert_eq!(parse_line("每周周一3~1节"), None);
        assert_eq!(parse_line("每周周一0~1节"), None);
        assert_eq!(parse_line("每周周一11~12节"), None);
        assert_eq!(parse_line("每周周一1~99999999999999999999999节"), None);
        assert!(parse_line("每周周一11~11节").is_some());
    }

    #[test]
    fn only_ascii_period_numbers() {
        let schedule = parse_line("每周周一１~２节 每周周二1~2节").unwrap();
        assert_eq!(schedule.weekday(), Weekday::Tue);
        assert_eq!(schedule.duration(), (0, 1));
        assert_eq!(parse_line("每周周一１~２节"), None);
    }

    #[test]
    fn parsed_ranges_are_ordered() {
        for line in ["每周周一1~1节", "单周周二2~5节", "双周周日10~11节"] {
            let (start, end) = parse_line(line).unwrap().duration();
            assert!(start <= end && end < PERIODS.len());
        }
    }

    #[test]
    fn clock_times() {
        let schedule = parse_line("每周周三3~4节").unwrap();
        assert_eq!(schedule.start_time(), NaiveTime::from_hms_opt(10, 10, 0));
        assert_eq!(schedule.end_time(), NaiveTime::from_hms_opt(12, 0, 0));
        assert!(schedule.is_on(Weekday::Wed));
    }

    #[test]
    fn display() {
        let schedule = parse_line("单周周Thu7~8节").unwrap();
        assert_eq!(schedule.to_string(), "星期四 第 7-8 节");
        assert_eq!(
            parse_line("每周周五10~11节").unwrap().to_string(),
            "星期五 第 10-11 节"
        );
    }
}
