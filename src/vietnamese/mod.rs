//! Vietnamese lunisolar calendar (âm lịch)
//!
//! Months begin on the local day of the astronomical new moon; the month
//! holding the winter solstice is month 11; a year with thirteen new moons
//! between two month-11 starts repeats the first month lacking a principal
//! solar term as a leap month. New moons and solar longitudes come from the
//! approximations in [`astronomy`], so everything here is computed, not
//! looked up, and works for any date in [`SUPPORTED_YEARS`].
//!
//! The calendar depends on the timezone: Vietnam uses UTC+7
//! ([`VIETNAM_TZ`]), which is why some years begin a day or even a month
//! apart from the Chinese calendar (UTC+8).
//!
//! # Example
//!
//! ```
//! use amlich::Date;
//! use amlich::vietnamese::{LunarDate, Month::*, VIETNAM_TZ};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let lunar = LunarDate::from_solar(date, VIETNAM_TZ);
//!
//! assert_eq!((1999, Common(11), 25), (lunar.year, lunar.month, lunar.day));
//! assert_eq!("25/11/1999 (Kỷ Mão)", format!("{lunar} ({})", lunar.year_name()));
//! ```

use std::fmt as std_fmt;
use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::date::{Date, DateError, julian_day_number};
use astronomy::{EPOCH_NEW_MOON, SYNODIC_MONTH, new_moon_day, sun_longitude_sector};

pub mod astronomy;
pub mod fmt;

pub use fmt::SexagenaryName;

/// Offset of Vietnam's civil time (UTC+7) in minutes.
pub const VIETNAM_TZ: i32 = 7 * 60;

/// Years the conversions accept. Lunation numbers and day numbers stay well
/// inside `i32` over this range.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = -1_000_000..=1_000_000;

/// Julian day number of 1900-01-01, origin for estimating the lunation
/// around December 31.
const MONTH_11_EPOCH: i64 = 2415021;

/// Lunar month number; `Common` for a regular month, `Leap` for the leap
/// month (tháng nhuận) repeating the number of the month before it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// Returns the month number, leap or not.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// Vietnamese month name, see [`fmt::month`].
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// A date in the Vietnamese lunisolar calendar.
///
/// `year` is the lunar year, numbered after the solar year in which its
/// month 1 (tháng Giêng) begins. Its months 11 and 12 run mostly through
/// December and January.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    /// Converts a solar date into the lunar calendar of timezone
    /// `tz_offset_minutes` east of UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::vietnamese::{LunarDate, Month::*, VIETNAM_TZ};
    ///
    /// let date = Date::from_gregorian(2023, 4, 1).unwrap();
    /// let lunar = LunarDate::from_solar(date, VIETNAM_TZ);
    /// assert_eq!(Leap(2), lunar.month);
    /// assert_eq!(11, lunar.day);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the year of `date` is outside [`SUPPORTED_YEARS`].
    pub fn from_solar(date: Date, tz_offset_minutes: i32) -> Self {
        let tz = tz_offset_minutes;
        let day_number = date.jdn();
        let (solar_year, _, _) = date.gregorian();
        assert!(
            SUPPORTED_YEARS.contains(&solar_year),
            "year {solar_year} outside {SUPPORTED_YEARS:?}"
        );

        // The mean-lunation estimate drifts far from 1900; settle on the
        // last new moon not after `date`.
        let mut k = ((f64::from(day_number) - EPOCH_NEW_MOON) / SYNODIC_MONTH).floor() as i32;
        while new_moon_day(k + 1, tz) <= date {
            k += 1;
        }
        while new_moon_day(k, tz) > date {
            k -= 1;
        }
        let month_start = new_moon_day(k, tz);

        let mut a11 = lunar_month_11(solar_year, tz);
        let mut b11 = a11;
        let mut year = if a11 >= month_start {
            a11 = lunar_month_11(solar_year - 1, tz);
            solar_year
        } else {
            b11 = lunar_month_11(solar_year + 1, tz);
            solar_year + 1
        };
        trace!(%date, %month_start, %a11, %b11, "bracketed lunar year");

        let day = (date - month_start).unsigned_abs() + 1;
        let diff = (month_start - a11).div_euclid(29);
        let mut leap = false;
        let mut month = diff + 11;
        if b11 - a11 > 365 {
            let leap_offset = leap_month_offset(a11, tz);
            if diff >= leap_offset {
                month = diff + 10;
                leap = diff == leap_offset;
            }
        }
        if month > 12 {
            month -= 12;
        }
        if month >= 11 && diff < 4 {
            year -= 1;
        }

        let month = month as u32;
        let month = if leap {
            Month::Leap(month)
        } else {
            Month::Common(month)
        };
        let lunar = Self { year, month, day };
        debug!(%date, %lunar, leap, "converted solar date");
        lunar
    }

    /// Stem-branch name of the lunar year.
    pub fn year_name(&self) -> SexagenaryName {
        fmt::year_name(self.year)
    }
    /// Stem-branch name of the lunar month.
    pub fn month_name(&self) -> SexagenaryName {
        fmt::month_name(self.year, self.month.num())
    }
}

/// `D/M/Y`, the leap flag is not shown.
impl std_fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month.num(), self.year)
    }
}

/// Converts the civil date `day/month/year` into the lunar calendar of
/// timezone `tz_offset_minutes` east of UTC.
///
/// # Errors
///
/// Returns [`DateError`] if the civil date does not exist or its year is
/// outside [`SUPPORTED_YEARS`].
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{solar_to_lunar, Month::*, VIETNAM_TZ};
///
/// let tet = solar_to_lunar(10, 2, 2024, VIETNAM_TZ).unwrap();
/// assert_eq!((2024, Common(1), 1), (tet.year, tet.month, tet.day));
/// assert!(solar_to_lunar(30, 2, 2024, VIETNAM_TZ).is_err());
/// ```
pub fn solar_to_lunar(
    day: i32,
    month: i32,
    year: i32,
    tz_offset_minutes: i32,
) -> Result<LunarDate, DateError> {
    let date = Date::from_gregorian(year, month, day)?;
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(DateError::OutOfRange { year });
    }
    Ok(LunarDate::from_solar(date, tz_offset_minutes))
}

/// Returns the first day of lunar month 11 (the month holding the winter
/// solstice) near the end of solar year `year`.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{lunar_month_11, VIETNAM_TZ};
///
/// assert_eq!("1999-12-08", lunar_month_11(1999, VIETNAM_TZ).iso_gregorian());
/// ```
pub fn lunar_month_11(year: i32, tz_offset_minutes: i32) -> Date {
    let off = julian_day_number(31, 12, year) - MONTH_11_EPOCH;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i32;
    let new_moon = new_moon_day(k, tz_offset_minutes);
    // Past the solstice already: the previous new moon opens month 11.
    if sun_longitude_sector(new_moon, tz_offset_minutes) >= 9 {
        new_moon_day(k - 1, tz_offset_minutes)
    } else {
        new_moon
    }
}

/// For a thirteen-month year starting at month 11 on `a11`, returns how many
/// months after `a11` the leap month comes.
///
/// The leap month is the first one in which the sun does not enter a new
/// 30° sector, i.e. which holds no principal solar term.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{leap_month_offset, lunar_month_11, VIETNAM_TZ};
///
/// // 11, 12, 1, 2, leap 2: 2023 repeats month 2.
/// let a11 = lunar_month_11(2022, VIETNAM_TZ);
/// assert_eq!(4, leap_month_offset(a11, VIETNAM_TZ));
/// ```
pub fn leap_month_offset(a11: Date, tz_offset_minutes: i32) -> i32 {
    let tz = tz_offset_minutes;
    let k = ((f64::from(a11.jdn()) - EPOCH_NEW_MOON) / SYNODIC_MONTH + 0.5).floor() as i32;
    let mut i = 1;
    let mut arc = sun_longitude_sector(new_moon_day(k + i, tz), tz);
    loop {
        let last = arc;
        i += 1;
        arc = sun_longitude_sector(new_moon_day(k + i, tz), tz);
        if arc == last || i >= 14 {
            break;
        }
    }
    i - 1
}

/// Converts a lunar date back into the solar calendar.
///
/// # Errors
///
/// Returns [`LunarDateError`] if the year is outside [`SUPPORTED_YEARS`], if
/// the month is not in `1..=12`, if the month is marked leap but the year has
/// no such leap month, or if the day is past the end of the month.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{lunar_to_solar, LunarDate, Month::*, VIETNAM_TZ};
///
/// let lunar = LunarDate { year: 2023, month: Leap(2), day: 1 };
/// let date = lunar_to_solar(lunar, VIETNAM_TZ).unwrap();
/// assert_eq!("2023-03-22", date.iso_gregorian());
/// ```
pub fn lunar_to_solar(lunar: LunarDate, tz_offset_minutes: i32) -> Result<Date, LunarDateError> {
    let tz = tz_offset_minutes;
    if !SUPPORTED_YEARS.contains(&lunar.year) {
        return Err(LunarDateError::OutOfRange { year: lunar.year });
    }
    let num = lunar.month.num();
    if !(1..=12).contains(&num) {
        return Err(LunarDateError::InvalidMonth { month: num });
    }
    let (a11, b11) = if num < 11 {
        (
            lunar_month_11(lunar.year - 1, tz),
            lunar_month_11(lunar.year, tz),
        )
    } else {
        (
            lunar_month_11(lunar.year, tz),
            lunar_month_11(lunar.year + 1, tz),
        )
    };
    let k = (0.5 + (f64::from(a11.jdn()) - EPOCH_NEW_MOON) / SYNODIC_MONTH).floor() as i32;
    let mut off = (num as i32 - 11).rem_euclid(12);
    if b11 - a11 > 365 {
        let leap_offset = leap_month_offset(a11, tz);
        // Offset 1 is a leap 11, offset 2 a leap 12.
        let leap_month = ((leap_offset + 9).rem_euclid(12) + 1) as u32;
        if lunar.month.is_leap() && num != leap_month {
            return Err(LunarDateError::NoLeapMonth {
                year: lunar.year,
                month: num,
            });
        }
        if lunar.month.is_leap() || off >= leap_offset {
            off += 1;
        }
    } else if lunar.month.is_leap() {
        return Err(LunarDateError::NoLeapMonth {
            year: lunar.year,
            month: num,
        });
    }

    let month_start = new_moon_day(k + off, tz);
    let max_day = (new_moon_day(k + off + 1, tz) - month_start) as u32;
    if !(1..=max_day).contains(&lunar.day) {
        return Err(LunarDateError::InvalidDay {
            day: lunar.day,
            max_day,
        });
    }
    let date = month_start + (lunar.day as i32 - 1);
    debug!(%lunar, %date, "converted lunar date");
    Ok(date)
}

/// Reasons a lunar date is rejected by [`lunar_to_solar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LunarDateError {
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },
    #[error("invalid lunar day: {day} (month has {max_day} days)")]
    InvalidDay { day: u32, max_day: u32 },
    #[error("lunar year {year} has no leap month {month}")]
    NoLeapMonth { year: i32, month: u32 },
    #[error("lunar year {year} is out of the supported range")]
    OutOfRange { year: i32 },
}
