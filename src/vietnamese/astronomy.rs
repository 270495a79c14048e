//! Approximate new moons and solar longitude
//!
//! Truncated series for the instant of new moon and the apparent longitude
//! of the sun. Accuracy is a few minutes of time over the historical range,
//! which is enough to fix calendar days except for new moons falling right
//! at local midnight.

use std::f64::consts::PI;

use crate::date::Date;
use crate::time_scales::{Tt, Ut};

/// Julian date of the reference new moon, 1900-01-01 about 13:51 UT; lunation
/// index 0.
pub const EPOCH_NEW_MOON: f64 = 2415021.076998695;

/// Mean length of a synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

const DEG: f64 = PI / 180.0;

/// Returns the local date of the `k`-th new moon after the reference new
/// moon of January 1900 (`k` may be negative), in timezone
/// `tz_offset_minutes` east of UTC.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::astronomy::new_moon_day;
///
/// assert_eq!("1900-01-01", new_moon_day(0, 420).iso_gregorian());
/// assert_eq!("2024-02-10", new_moon_day(1535, 420).iso_gregorian());
/// ```
pub fn new_moon_day(k: i32, tz_offset_minutes: i32) -> Date {
    let (tt, t) = new_moon(k);
    tt.to_ut(t).date_in_timezone(tz_offset_minutes)
}

/// Instant of the `k`-th new moon in TT, together with the time argument T
/// (Julian centuries since 1900) it was computed at.
fn new_moon(k: i32) -> (Tt, f64) {
    let k = f64::from(k);
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut jd1 = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DEG).sin();

    // sun's mean anomaly
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    // moon's mean anomaly
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    // moon's argument of latitude
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;

    let sin = |deg: f64| (deg * DEG).sin();
    let mut c1 = (0.1734 - 0.000393 * t) * sin(m) + 0.0021 * sin(2.0 * m);
    c1 = c1 - 0.4068 * sin(mpr) + 0.0161 * sin(2.0 * mpr);
    c1 -= 0.0004 * sin(3.0 * mpr);
    c1 = c1 + 0.0104 * sin(2.0 * f) - 0.0051 * sin(m + mpr);
    c1 = c1 - 0.0074 * sin(m - mpr) + 0.0004 * sin(2.0 * f + m);
    c1 = c1 - 0.0004 * sin(2.0 * f - m) - 0.0006 * sin(2.0 * f + mpr);
    c1 = c1 + 0.0010 * sin(2.0 * f - mpr) + 0.0005 * sin(2.0 * mpr + m);

    (Tt(jd1 + c1), t)
}

/// Apparent longitude of the sun in radians, normalized into `0..2π`.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
/// use amlich::time_scales::Ut;
/// use amlich::vietnamese::astronomy::sun_longitude;
///
/// // 2000 March equinox, 07:35 UT
/// let l = sun_longitude(Ut(2451623.816));
/// assert!(l < 0.001 || 2.0 * PI - l < 0.001);
/// ```
pub fn sun_longitude(ut: Ut) -> f64 {
    let t = (ut.0 - 2451545.0) / 36525.0;
    let t2 = t * t;
    // mean anomaly and mean longitude, degrees
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (DEG * m).sin();
    dl = dl
        + (0.019993 - 0.000101 * t) * (DEG * 2.0 * m).sin()
        + 0.000290 * (DEG * 3.0 * m).sin();
    let l = (l0 + dl) * DEG;
    l - PI * 2.0 * (l / (PI * 2.0)).floor()
}

/// Returns which 30° sector (`0..=11`) the sun's longitude is in at the
/// local midnight starting `date`.
///
/// Sector 0 begins at the March equinox, so sector 9 begins at the winter
/// solstice. Each sector holds one principal solar term.
///
/// # Example
///
/// ```
/// use amlich::Date;
/// use amlich::vietnamese::astronomy::sun_longitude_sector;
///
/// let date = Date::from_gregorian(2023, 12, 23).unwrap();
/// assert_eq!(9, sun_longitude_sector(date, 420));
/// ```
pub fn sun_longitude_sector(date: Date, tz_offset_minutes: i32) -> u32 {
    let l = sun_longitude(Ut::local_midnight(date, tz_offset_minutes));
    (l / PI * 6.0).floor() as u32
}
