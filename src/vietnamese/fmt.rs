//! Vietnamese names for sexagenary cycles, months and days.

use std::fmt;

use super::Month;
use crate::date::Date;

/// The ten Heavenly Stems (can), in cycle order.
pub static STEMS: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

/// The twelve Earthly Branches (chi), in cycle order.
pub static BRANCHES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// A stem-branch (can chi) pair, e.g. `Giáp Thìn`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SexagenaryName {
    pub stem: &'static str,
    pub branch: &'static str,
}

impl SexagenaryName {
    /// Looks up a pair by table indices; both wrap around.
    pub fn from_indices(stem: i64, branch: i64) -> Self {
        Self {
            stem: STEMS[stem.rem_euclid(10) as usize],
            branch: BRANCHES[branch.rem_euclid(12) as usize],
        }
    }
    /// Looks up a pair by its number in the sexagenary cycle, 1 (Giáp Tý)
    /// to 60 (Quý Hợi).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::vietnamese::fmt::SexagenaryName;
    ///
    /// assert_eq!("Giáp Tý", SexagenaryName::from_cycle(1).to_string());
    /// assert_eq!("Quý Hợi", SexagenaryName::from_cycle(60).to_string());
    /// ```
    pub fn from_cycle(num: i32) -> Self {
        let idx = i64::from(num) - 1;
        Self::from_indices(idx, idx)
    }
}

impl fmt::Display for SexagenaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}

/// Stem-branch name of a lunar year. Year 1984 starts the cycle.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::fmt::year_name;
///
/// assert_eq!("Giáp Tý", year_name(1984).to_string());
/// assert_eq!("Giáp Thìn", year_name(2024).to_string());
/// ```
pub fn year_name(lunar_year: i32) -> SexagenaryName {
    let y = i64::from(lunar_year);
    SexagenaryName::from_indices(y + 6, y + 8)
}

/// Stem-branch name of a lunar month. A leap month shares the name of the
/// month it repeats.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::fmt::month_name;
///
/// assert_eq!("Bính Dần", month_name(2024, 1).to_string());
/// ```
pub fn month_name(lunar_year: i32, month: u32) -> SexagenaryName {
    let m = i64::from(month);
    SexagenaryName::from_indices(i64::from(lunar_year) * 12 + m + 3, m + 1)
}

/// Stem-branch name of a day.
///
/// # Example
///
/// ```
/// use amlich::Date;
/// use amlich::vietnamese::fmt::day_name;
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// assert_eq!("Mậu Ngọ", day_name(date).to_string());
/// ```
pub fn day_name(date: Date) -> SexagenaryName {
    SexagenaryName::from_cycle(date.sexagenary())
}

/// Month name, e.g. `tháng Giêng`, `tháng Tư nhuận`. Months 11 and 12 are
/// `tháng Một` and `tháng Chạp`.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{self, Month::*};
///
/// assert_eq!("tháng Chạp", vietnamese::fmt::month(Common(12)));
/// assert_eq!("tháng Hai nhuận", vietnamese::fmt::month(Leap(2)));
/// ```
///
/// # Panics
///
/// Panics if the month number is not in `1..=12`.
pub fn month(m: Month) -> String {
    const NAMES: &[&str] = &[
        "Giêng", "Hai", "Ba", "Tư", "Năm", "Sáu", "Bảy", "Tám", "Chín", "Mười", "Một", "Chạp",
    ];
    let num = m.num();
    let name = match num {
        1..=12 => NAMES[num as usize - 1],
        _ => panic!("month {} not in 1..=12", num),
    };
    let mut rt = format!("tháng {name}");
    if m.is_leap() {
        rt += " nhuận";
    }
    rt
}

/// Day name: `mùng 1` to `mùng 10`, `rằm` for the full-moon 15th, the bare
/// number otherwise.
///
/// # Example
///
/// ```
/// use amlich::vietnamese;
///
/// assert_eq!("mùng 5", vietnamese::fmt::day(5));
/// assert_eq!("rằm", vietnamese::fmt::day(15));
/// assert_eq!("30", vietnamese::fmt::day(30));
/// ```
///
/// # Panics
///
/// Panics if the day is not in `1..=30`.
pub fn day(d: u32) -> String {
    match d {
        1..=10 => format!("mùng {d}"),
        15 => "rằm".to_owned(),
        11..=30 => d.to_string(),
        _ => panic!("day {} not in 1..=30", d),
    }
}
