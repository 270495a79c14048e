//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Julian day number of 1582-10-15, the first day of the Gregorian calendar.
///
/// Days before it are read and rendered in the (proleptic) Julian calendar.
pub const GREGORIAN_REFORM_JDN: i32 = 2299161;

/// Computes the Julian day number (JDN) of a civil date.
///
/// Dates resolving on or after 1582-10-15 are read as Gregorian, earlier
/// ones as Julian. `year` is an astronomical year number (1 BC is `0`).
///
/// Nothing is validated: a day or month out of range is simply carried into
/// the arithmetic, giving a defined but usually meaningless number. Use
/// [`Date::from_gregorian`] to reject such input.
///
/// # Example
///
/// ```
/// use amlich::date::julian_day_number;
///
/// assert_eq!(2451545, julian_day_number(1, 1, 2000));
/// assert_eq!(2299161, julian_day_number(15, 10, 1582));
/// assert_eq!(2299160, julian_day_number(4, 10, 1582)); // Julian calendar
/// ```
pub fn julian_day_number(day: i32, month: i32, year: i32) -> i64 {
    let (d, m, y) = (i64::from(day), i64::from(month), i64::from(year));
    let a = (14 - m).div_euclid(12);
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    let base = d + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    let gregorian = base - y.div_euclid(100) + y.div_euclid(400) - 32045;
    if gregorian < i64::from(GREGORIAN_REFORM_JDN) {
        base - 32083
    } else {
        gregorian
    }
}

/// A calendar-independant date.
///
/// Internally a Julian day number, so dates are totally ordered and
/// differences are day counts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` with a civil calendar date: Gregorian from
    /// 1582-10-15 on, Julian before.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// # Errors
    ///
    /// Rejects months outside `1..=12`, days past the end of the month, the
    /// ten days dropped by the 1582 reform, and dates whose JDN does not fit
    /// in an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, YearType::from_civil(year));
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        let jdn = i32::try_from(julian_day_number(day, month, year))
            .map_err(|_| DateError::OutOfRange { year })?;
        let date = Self::from_jdn(jdn);
        if date.gregorian() != (year, month, day) {
            return Err(DateError::ReformGap { day });
        }
        Ok(date)
    }
    /// Represents the date in the civil calendar (Julian before 1582-10-15,
    /// Gregorian after).
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// assert_eq!((2000, 1, 1), Date::from_jdn(2451545).gregorian());
    /// assert_eq!((1582, 10, 4), Date::from_jdn(2299160).gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let (b, c) = if self.jdn >= GREGORIAN_REFORM_JDN {
            let a = jdn + 32044;
            let b = (4 * a + 3).div_euclid(146097);
            (b, a - (146097 * b).div_euclid(4))
        } else {
            (0, jdn + 32082)
        };
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);
        // Every component is bounded by the i32 JDN it came from.
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        self.jdn.rem_euclid(7) + 1
    }
    /// Returns the sexagenary day number of the date, numbered from 1
    /// (Giáp Tý) to 60 (Quý Hợi).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // Mậu Ngọ
    /// ```
    pub fn sexagenary(&self) -> i32 {
        (self.jdn + 49).rem_euclid(60) + 1
    }
}

/// Moves a date by a number of days.
///
/// # Panics
///
/// Panics if the resulting JDN overflows `i32`.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        let jdn = self.jdn.checked_add(rhs).expect("overflow when adding days to date");
        Date::from_jdn(jdn)
    }
}
/// Number of days between two dates.
///
/// # Panics
///
/// Panics if the difference overflows `i32`.
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn
            .checked_sub(rhs.jdn)
            .expect("overflow when subtracting dates")
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// Parses `YYYY-MM-DD`; the year may be negative (astronomical numbering).
///
/// ```
/// use amlich::Date;
///
/// let date: Date = "2024-02-10".parse().unwrap();
/// assert_eq!((2024, 2, 10), date.gregorian());
/// ```
impl FromStr for Date {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed(s.to_owned());
        let mut it = s.trim().rsplitn(3, '-');
        let mut field = || -> Result<i32, DateError> {
            it.next()
                .filter(|v| !v.is_empty())
                .ok_or_else(malformed)?
                .parse()
                .map_err(|_| malformed())
        };
        let day = field()?;
        let month = field()?;
        let year = field()?;
        Self::from_gregorian(year, month, day)
    }
}

/// Reasons a civil date is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: i32 },
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: i32, month: i32, max_day: i32 },
    #[error("1582-10-{day:02} does not exist (dropped by the Gregorian reform)")]
    ReformGap { day: i32 },
    #[error("year {year} is out of the supported range")]
    OutOfRange { year: i32 },
    #[error("malformed date {0:?}, expected YYYY-MM-DD")]
    Malformed(String),
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Determines if `year` is a leap year in Julian calendar.
    pub fn from_julian(year: i32) -> Self {
        if year.rem_euclid(4) == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Leap rule of the civil calendar: Julian up to 1582, Gregorian after.
    pub fn from_civil(year: i32) -> Self {
        if year <= 1582 {
            Self::from_julian(year)
        } else {
            Self::from_gregorian(year)
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn days_in_month(month: i32, year_type: YearType) -> i32 {
    match month {
        2 => 28 + year_type.is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn reform_boundary() {
        assert_eq!(2299160, julian_day_number(4, 10, 1582));
        assert_eq!(2299161, julian_day_number(15, 10, 1582));
        let last_julian = Date::from_gregorian(1582, 10, 4).unwrap();
        let first_gregorian = Date::from_gregorian(1582, 10, 15).unwrap();
        assert_eq!(1, first_gregorian - last_julian);
        assert_eq!(
            Err(DateError::ReformGap { day: 10 }),
            Date::from_gregorian(1582, 10, 10)
        );
    }

    #[test]
    fn julian_leap_years() {
        assert!(Date::from_gregorian(1500, 2, 29).is_ok());
        assert_eq!(
            Err(DateError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28
            }),
            Date::from_gregorian(1900, 2, 29)
        );
        assert!(Date::from_gregorian(2000, 2, 29).is_ok());
    }

    #[test]
    fn rejects_invalid() {
        assert_eq!(
            Err(DateError::InvalidMonth { month: 13 }),
            Date::from_gregorian(2024, 13, 1)
        );
        assert_eq!(
            Err(DateError::InvalidDay {
                day: 31,
                month: 4,
                max_day: 30
            }),
            Date::from_gregorian(2024, 4, 31)
        );
        assert!(Date::from_gregorian(2024, 1, 0).is_err());
        assert!(matches!(
            Date::from_gregorian(i32::MAX, 1, 1),
            Err(DateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn to_sexagenary() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(18, date.sexagenary());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(56, date.sexagenary());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }

    #[test]
    fn parse() {
        assert_eq!(
            Ok(Date::from_jdn(2451545)),
            "2000-01-01".parse::<Date>()
        );
        assert_eq!((-44, 3, 15), "-44-03-15".parse::<Date>().unwrap().gregorian());
        for bad in ["", "2000-01", "2000/01/01", "2000-xx-01", "2000--01"] {
            assert_eq!(
                Err(DateError::Malformed(bad.to_owned())),
                bad.parse::<Date>(),
                "{bad:?}"
            );
        }
        assert_eq!(
            Err(DateError::InvalidMonth { month: 13 }),
            "2000-13-01".parse::<Date>()
        );
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 2, 28).unwrap();
        assert_eq!((2024, 3, 1), (date + 2).gregorian());
        assert_eq!((2023, 12, 31), (date + -59).gregorian());
        let new_year = Date::from_gregorian(2024, 1, 1).unwrap();
        assert_eq!(366, Date::from_gregorian(2025, 1, 1).unwrap() - new_year);
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn add_overflow() {
        let _ = Date::from_jdn(i32::MAX) + 1;
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn sub_overflow() {
        let _ = Date::from_jdn(i32::MIN) - Date::from_jdn(1);
    }
}
