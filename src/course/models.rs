use std::sync::Arc;

use crate::info::ExamInfo;
use crate::timetable::Schedule;

/// 课程类别
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CourseType {
    /// 专业必修
    MajorRequired,
    /// 全校必修
    AllRequired,
    /// 限选
    MajorLimited,
    /// 任选
    Any,
    /// 通识课(通选课I)
    PublicI,
    /// 通识课(通选课II)
    PublicII,
    /// 通识课(通选课III)
    PublicIII,
    /// 通识课(通选课IV)
    PublicIV,
    /// 通识课(通选课V)
    PublicV,
    /// 通识课(通识核心课I)
    PublicCoreI,
    /// 通识课(通识核心课II)
    PublicCoreII,
    /// 通识课(通识核心课III)
    PublicCoreIII,
    /// 通识课(通识核心课IV)
    PublicCoreIV,
    /// 通识课(通识核心课V)
    PublicCoreV,
    Unknown,
}

/// Facts shared by every class of the same course
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Course {
    /// 课程名
    pub name: Option<String>,

    /// 课程类别
    pub course_type: Option<CourseType>,

    /// 学分
    pub credit: Option<f64>,

    /// 周学时
    pub course_periods: Option<f64>,

    /// 开课单位
    pub faculty: Option<String>,

    /// 课程ID
    pub course_id: Option<u64>,
}

/// One enrollable section of a course
#[derive(Clone, Debug, PartialEq)]
pub struct Class {
    /// Course this class belongs to
    pub course: Arc<Course>,

    /// 班号
    pub class_no: Option<String>,

    /// 教师
    pub teachers: Vec<String>,

    /// 上课地点, filled by [`Class::parse_info`]
    pub location: Option<String>,

    /// 上课时间, filled by [`Class::parse_info`]
    pub schedules: Vec<Schedule>,

    /// Raw 教室信息 cell, bundles the schedule, room and exam lines
    pub info: String,

    /// 考试信息, filled by [`Class::parse_info`]
    pub exam_info: Option<ExamInfo>,

    /// 选课结果
    pub result: Option<String>,

    /// 备注
    pub remarks: String,
}
