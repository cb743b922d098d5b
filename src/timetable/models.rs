use chrono::Weekday;

/// Which weeks of the semester a schedule recurs on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// 每周
    Every,
    /// 单周
    Odd,
    /// 双周
    Even,
}

impl Parity {
    /// Numeric code: 0 every week, 1 odd weeks, 2 even weeks
    pub fn code(self) -> u8 {
        match self {
            Self::Every => 0,
            Self::Odd => 1,
            Self::Even => 2,
        }
    }

    /// Character used by the portal
    pub fn symbol(self) -> char {
        match self {
            Self::Every => '每',
            Self::Odd => '单',
            Self::Even => '双',
        }
    }
}

/// One weekly slot, only built by [`parse_line`](super::parse_line)
///
/// The period range always lies within [`PERIODS`](super::PERIODS) with the
/// first period not after the last one.
///
/// ```compile_fail
/// use chrono::Weekday;
/// use pkucourse::{Parity, Schedule};
///
/// let _ = Schedule {
///     weekday: Weekday::Mon,
///     duration: (7, 2),
///     parity: Parity::Every,
/// };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Schedule {
    /// Day of the week
    pub(super) weekday: Weekday,

    /// First and last period, as indexes into [`PERIODS`](super::PERIODS):
    /// - 0 => first period of the day
    /// - 1 => second period of the day
    /// - etc.
    pub(super) duration: (usize, usize),

    /// Weeks the slot takes place
    pub(super) parity: Parity,
}

impl Schedule {
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// First and last period, 0-based
    pub fn duration(&self) -> (usize, usize) {
        self.duration
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Day of the week as a number, 0 for Monday
    pub fn weekday_index(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }
}
