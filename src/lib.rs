//! Timetable and enrollment records out of the PKU course-registration
//! portal's results page.
//!
//! ```text
//! page -> extract::rows -> translate -> Class::from_fields -> Class::parse_info
//! ```

pub mod course;
pub mod error;
pub mod extract;
pub mod info;
pub mod timetable;
pub mod translate;

pub use course::{Class, Course, CourseType};
pub use error::{Error, Result};
pub use extract::classes_from_html;
pub use info::{ExamInfo, InfoFields};
pub use timetable::{Parity, Schedule, PERIODS};
pub use translate::{translate, Fields, Language};
