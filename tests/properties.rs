use amlich::Date;
use amlich::date::julian_day_number;
use amlich::vietnamese::{LunarDate, VIETNAM_TZ, lunar_to_solar};
use proptest::prelude::*;

/// 1800-01-01 to 2199-12-31
const JDN_RANGE: std::ops::Range<i32> = 2378497..2524594;
/// 1000-01-01 to 2999-12-31, reaching leap months 11 and 12
const WIDE_JDN_RANGE: std::ops::Range<i32> = 2086308..2816788;

proptest! {
    #[test]
    fn jdn_matches_civil_date(jdn in 1_000_000i32..3_000_000) {
        let (y, m, d) = Date::from_jdn(jdn).gregorian();
        prop_assert_eq!(i64::from(jdn), julian_day_number(d, m, y));
        prop_assert_eq!(Ok(Date::from_jdn(jdn)), Date::from_gregorian(y, m, d));
    }

    #[test]
    fn jdn_increases_in_calendar_order(jdn in 1_000_000i32..3_000_000) {
        let (y, m, d) = Date::from_jdn(jdn).gregorian();
        let (ny, nm, nd) = Date::from_jdn(jdn + 1).gregorian();
        prop_assert!((ny, nm, nd) > (y, m, d));
        prop_assert!(julian_day_number(nd, nm, ny) > julian_day_number(d, m, y));
    }

    #[test]
    fn conversion_is_deterministic(jdn in JDN_RANGE) {
        let date = Date::from_jdn(jdn);
        prop_assert_eq!(
            LunarDate::from_solar(date, VIETNAM_TZ),
            LunarDate::from_solar(date, VIETNAM_TZ)
        );
    }

    #[test]
    fn lunar_round_trip(jdn in JDN_RANGE) {
        let date = Date::from_jdn(jdn);
        let lunar = LunarDate::from_solar(date, VIETNAM_TZ);
        prop_assert!((1..=30).contains(&lunar.day));
        prop_assert!((1..=12).contains(&lunar.month.num()));
        prop_assert_eq!(Ok(date), lunar_to_solar(lunar, VIETNAM_TZ));
    }

    #[test]
    fn lunar_round_trip_wide(jdn in WIDE_JDN_RANGE) {
        let date = Date::from_jdn(jdn);
        let lunar = LunarDate::from_solar(date, VIETNAM_TZ);
        prop_assert!((1..=30).contains(&lunar.day), "{:?}", lunar);
        prop_assert_eq!(Ok(date), lunar_to_solar(lunar, VIETNAM_TZ));
    }

    #[test]
    fn consecutive_days(jdn in JDN_RANGE) {
        let today = LunarDate::from_solar(Date::from_jdn(jdn), VIETNAM_TZ);
        let tomorrow = LunarDate::from_solar(Date::from_jdn(jdn + 1), VIETNAM_TZ);
        if tomorrow.day == 1 {
            prop_assert!(today.day == 29 || today.day == 30);
        } else {
            prop_assert_eq!(today.day + 1, tomorrow.day);
            prop_assert_eq!(today.month, tomorrow.month);
            prop_assert_eq!(today.year, tomorrow.year);
        }
    }
}
