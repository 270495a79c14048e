//! Deals with different time scales, specifically, conversion from dynamical
//! time (TT) into universal time (UT) and from UT into local civil dates.
//!
//! Only conversions necessary for other computations in this crate are
//! included.

use crate::date::Date;

/// [Terristrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// Lunar and solar theories are expressed in this uniform time scale, and
/// should be converted to UT when calculating dates.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), the actual
/// civil time used for determining the actual date at a given time point,
/// represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

/// ΔT = TT − UT in days, for `t` Julian centuries since 1900-01-01.
///
/// Two polynomial fits are used: one for the distant past (before about
/// AD 800, `t < -11`) and one for recent centuries.
///
/// # Example
///
/// ```
/// use amlich::time_scales::delta_t;
///
/// assert!((delta_t(0.0) + 0.000278).abs() < 1e-12);
/// ```
pub fn delta_t(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    }
}

impl Tt {
    /// Converts into UT, with ΔT evaluated at `t` Julian centuries since
    /// 1900-01-01.
    pub fn to_ut(self, t: f64) -> Ut {
        Ut(self.0 - delta_t(t))
    }
}

impl Ut {
    /// Returns the date at the time point in timezone ahead (east) of UTC by
    /// `tz_offset_minutes` minutes.
    ///
    /// For Vietnam (UTC+7), `tz_offset_minutes` should be +420.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::time_scales::Ut;
    ///
    /// let ut = Ut(2451545.3); // 2000-01-01T19:12Z
    /// assert_eq!((2000, 1, 1), ut.date_in_timezone(0).gregorian());
    /// assert_eq!((2000, 1, 2), ut.date_in_timezone(420).gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Date {
        let jdn = (self.0 + 0.5 + f64::from(tz_offset_minutes) / 1440.0).floor();
        Date::from_jdn(jdn as i32)
    }
    /// Returns the instant of local midnight starting `date` in timezone
    /// `tz_offset_minutes` east of UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::time_scales::Ut;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(Ut(2451544.5), Ut::local_midnight(date, 0));
    /// ```
    pub fn local_midnight(date: Date, tz_offset_minutes: i32) -> Self {
        Ut(f64::from(date.jdn()) - 0.5 - f64::from(tz_offset_minutes) / 1440.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tt_to_ut() {
        let tt = Tt(2451545.0);
        let ut = tt.to_ut(1.0);
        assert!((tt.0 - ut.0 - (-0.000278 + 0.000265 + 0.000262)).abs() < 1e-9);
    }

    #[test]
    fn delta_t_branches() {
        // Ancient fit applies strictly below -11 centuries.
        let ancient = 0.001 + 0.000839 * -12.0 + 0.0002261 * 144.0 - 0.00000845 * -1728.0
            - 0.000000081 * 20736.0;
        assert!((delta_t(-12.0) - ancient).abs() < 1e-12);
        let recent = -0.000278 + 0.000265 * -11.0 + 0.000262 * 121.0;
        assert!((delta_t(-11.0) - recent).abs() < 1e-12);
    }

    #[test]
    fn timezone_boundary() {
        let ut_midnight = Ut(2451544.5 - 7.0 / 24.0);
        assert_eq!(
            (2000, 1, 1),
            Ut(ut_midnight.0 + 1.0 / 86400.0)
                .date_in_timezone(420)
                .gregorian()
        );
        assert_eq!(
            (1999, 12, 31),
            Ut(ut_midnight.0 - 1.0 / 86400.0)
                .date_in_timezone(420)
                .gregorian()
        );
    }
}
