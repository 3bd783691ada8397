use crate::base;

/// A date type without time or timezone information. Values are guaranteed to
/// be between `1000-01-01` and `9999-12-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    pub const MIN_YEAR: i32 = 1000;
    pub const MAX_YEAR: i32 = 9999;

    pub fn from_ymd(year: i32, month: time::Month, day: u8) -> Option<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return None;
        }
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> time::Month {
        self.0.month()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// Week of the month the date falls in, counting from the 1st in blocks
    /// of seven days. Always in `1..=5`.
    pub fn week_of_month(self) -> u8 {
        self.day().div_ceil(7)
    }

    pub fn first_of(self, part: base::Datepart) -> Self {
        match part {
            base::Datepart::Day => self,
            base::Datepart::Year => Self::from_ymd(self.year(), time::Month::January, 1)
                .expect("first day of a valid year should be a valid date"),
            base::Datepart::Month => Self::from_ymd(self.year(), self.month(), 1)
                .expect("first day of a valid month should be a valid date"),
        }
    }

    pub fn format(
        self,
        fmt: &(impl time::formatting::Formattable + ?Sized),
    ) -> Result<String, time::error::Format> {
        self.0.format(fmt)
    }
}

impl std::fmt::Display for Date {
    /// Formats as `dd/mm/yyyy`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .format(time::macros::format_description!("[day]/[month]/[year]"))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected 3 components separated by '/', found {0}")]
    ComponentCount(usize),
    #[error(transparent)]
    NotAnInteger(#[from] std::num::ParseIntError),
    #[error("day {0} is not between 1 and 31")]
    Day(u32),
    #[error("month {0} is not between 1 and 12")]
    Month(u32),
    #[error("year {0} is not between 1000 and 9999")]
    Year(u32),
    #[error("day {day} does not exist in {month} {year}")]
    Nonexistent {
        day: u32,
        month: time::Month,
        year: u32,
    },
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a `dd/mm/yyyy` date. Components need not be zero padded.
    /// Dates that do not exist in the calendar are rejected rather than
    /// rolled over into the following month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let parts = s.split('/').map(str::trim).collect::<Vec<_>>();
        let [day, month, year] = parts[..] else {
            return Err(Self::Err::ComponentCount(parts.len()));
        };
        let (day, month, year) = (
            day.parse::<u32>()?,
            month.parse::<u32>()?,
            year.parse::<u32>()?,
        );
        if !(1..=31).contains(&day) {
            return Err(Self::Err::Day(day));
        }
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok())
            .ok_or(Self::Err::Month(month))?;
        let y = i32::try_from(year)
            .ok()
            .filter(|y| (Self::MIN_YEAR..=Self::MAX_YEAR).contains(y))
            .ok_or(Self::Err::Year(year))?;
        Self::from_ymd(y, month, day as u8).ok_or(Self::Err::Nonexistent { day, month, year })
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
