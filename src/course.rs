use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::info;
use crate::translate::Fields;

pub mod models;

pub use models::{Class, Course, CourseType};

/// Portal label of every known course type
const COURSE_TYPES: &[(&str, CourseType)] = &[
    ("专业必修", CourseType::MajorRequired),
    ("全校必修", CourseType::AllRequired),
    ("限选", CourseType::MajorLimited),
    ("任选", CourseType::Any),
    ("通识课(通选课I)", CourseType::PublicI),
    ("通识课(通选课II)", CourseType::PublicII),
    ("通识课(通选课III)", CourseType::PublicIII),
    ("通识课(通选课IV)", CourseType::PublicIV),
    ("通识课(通选课V)", CourseType::PublicV),
    ("通识课(通识核心课I)", CourseType::PublicCoreI),
    ("通识课(通识核心课II)", CourseType::PublicCoreII),
    ("通识课(通识核心课III)", CourseType::PublicCoreIII),
    ("通识课(通识核心课IV)", CourseType::PublicCoreIV),
    ("通识课(通识核心课V)", CourseType::PublicCoreV),
];

/// Canonical field names read when assembling records
const COURSE_KEYS: &[&str] = &[
    "course_name",
    "course_type",
    "credit",
    "course_periods",
    "faculty",
    "course_id",
];
const CLASS_KEYS: &[&str] = &["teacher", "class_no", "info", "result", "remarks"];

impl CourseType {
    /// Classify a portal label, anything unlisted is [`CourseType::Unknown`]
    pub fn classify(label: &str) -> Self {
        COURSE_TYPES
            .iter()
            .find(|(l, _)| *l == label)
            .map_or(Self::Unknown, |(_, t)| *t)
    }

    /// Label the portal uses for this type, `None` for [`CourseType::Unknown`]
    pub fn label(self) -> Option<&'static str> {
        COURSE_TYPES
            .iter()
            .find(|(_, t)| *t == self)
            .map(|(l, _)| *l)
    }
}

/// Parse a numeric cell, blank cells count as unset
fn number<T>(fields: &Fields, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match fields.get(key).map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| Error::invalid_number(key, value, e)),
    }
}

fn text(fields: &Fields, key: &str) -> Option<String> {
    fields.get(key).map(ToOwned::to_owned)
}

impl Course {
    /// Build a course from the fields of a translated row it knows about
    ///
    /// # Errors
    /// [`Error::InvalidNumber`] when credit, periods or id are not numbers.
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            name: text(fields, "course_name"),
            course_type: fields.get("course_type").map(CourseType::classify),
            credit: number(fields, "credit")?,
            course_periods: number(fields, "course_periods")?,
            faculty: text(fields, "faculty"),
            course_id: number(fields, "course_id")?,
        })
    }
}

impl Class {
    /// Build a class and its course from one translated row
    ///
    /// # Errors
    /// [`Error::InvalidNumber`] when a numeric course field is not a number.
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let course = Arc::new(Course::from_fields(fields)?);
        Ok(Self::with_course(course, fields))
    }

    /// Build a class for an already known course
    pub fn with_course(course: Arc<Course>, fields: &Fields) -> Self {
        for key in fields.keys() {
            if !COURSE_KEYS.contains(&key) && !CLASS_KEYS.contains(&key) {
                debug!(key, "Dropping field");
            }
        }

        let teachers = fields
            .get("teacher")
            .map(|t| {
                t.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            course,
            class_no: text(fields, "class_no"),
            teachers,
            location: None,
            schedules: Vec::new(),
            info: text(fields, "info").unwrap_or_default(),
            exam_info: None,
            result: text(fields, "result"),
            remarks: text(fields, "remarks").unwrap_or_default(),
        }
    }

    /// Split the info blob into schedules, location and exam info
    ///
    /// Schedules are appended, location and exam info are replaced only when
    /// the blob holds one.
    pub fn parse_info(&mut self) {
        let parsed = info::decompose(&self.info);

        self.schedules.extend(parsed.schedules);
        if parsed.location.is_some() {
            self.location = parsed.location;
        }
        if parsed.exam_info.is_some() {
            self.exam_info = parsed.exam_info;
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.course.name.as_deref()
    }

    pub fn course_type(&self) -> Option<CourseType> {
        self.course.course_type
    }

    pub fn credit(&self) -> Option<f64> {
        self.course.credit
    }

    pub fn course_periods(&self) -> Option<f64> {
        self.course.course_periods
    }

    pub fn faculty(&self) -> Option<&str> {
        self.course.faculty.as_deref()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PKUClass({})", self.name().unwrap_or("?"))
    }
}
