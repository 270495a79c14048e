//! Utilities for converting dates into the Vietnamese lunisolar calendar
//! (âm lịch).
//!
//! New moons and solar longitudes are computed with truncated astronomical
//! series, so any date can be converted without lookup tables. The results
//! follow the Vietnamese convention of reckoning days at UTC+7.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use amlich::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Vietnamese lunisolar calendar:
//!
//! ```
//! use amlich::Date;
//! use amlich::vietnamese::{LunarDate, Month::*, VIETNAM_TZ};
//!
//! let date = Date::from_gregorian(2024, 3, 15).unwrap();
//! let lunar = LunarDate::from_solar(date, VIETNAM_TZ);
//!
//! assert_eq!((2024, Common(2), 6), (lunar.year, lunar.month, lunar.day));
//! assert_eq!("Giáp Thìn", lunar.year_name().to_string());
//! ```
//!
//! The [`notification`] module holds a small event hook that raises a
//! desktop notification when an assistant asks for permission.

pub mod date;
pub mod notification;
pub mod time_scales;
pub mod vietnamese;

pub use date::{Date, DateError, YearType};
pub use vietnamese::{LunarDate, LunarDateError, Month, SexagenaryName};
