//! Calendar date to Julian day conversion.

use chrono::{Datelike, NaiveDate};

/// Julian Day Number of a proleptic-Gregorian calendar date.
///
/// Standard Gregorian algorithm: January and February roll into months
/// 13 and 14 of the previous year through the `a` term, and the century
/// terms apply the Gregorian leap rules. The result is the integer JDN
/// with no fractional time-of-day offset, so inputs are treated at
/// whole-day resolution.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Days elapsed between `date` and the J2000.0 epoch.
pub fn days_since_j2000(date: NaiveDate) -> f64 {
    julian_day_number(date) as f64 - crate::J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn reference_dates_match_published_jdn() {
        // Values from the USNO Julian date converter.
        assert_eq!(julian_day_number(date(2000, 1, 1)), 2_451_545);
        assert_eq!(julian_day_number(date(2005, 11, 1)), 2_453_676);
        assert_eq!(julian_day_number(date(1999, 12, 31)), 2_451_544);
        assert_eq!(julian_day_number(date(1582, 10, 15)), 2_299_161);
    }

    #[test]
    fn february_rolls_into_the_previous_year() {
        assert_eq!(julian_day_number(date(2000, 2, 29)), 2_451_604);
        assert_eq!(julian_day_number(date(2000, 3, 1)), 2_451_605);
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        let mut previous = julian_day_number(date(2004, 12, 25));
        let mut current = date(2004, 12, 26);
        for _ in 0..80 {
            let jdn = julian_day_number(current);
            assert_eq!(jdn, previous + 1, "gap at {current}");
            previous = jdn;
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn j2000_offset_is_zero_at_epoch_date() {
        assert_eq!(days_since_j2000(date(2000, 1, 1)), 0.0);
        assert_eq!(days_since_j2000(date(2005, 11, 1)), 2131.0);
    }

    #[test]
    fn handles_dates_before_the_common_era() {
        // 4713-01-01 BC (proleptic Gregorian -4712-01-01) is close to the
        // Julian day origin; the formula must not lose the floor on
        // negative years.
        let origin = julian_day_number(date(-4712, 1, 1));
        assert_eq!(origin, 38);
        assert_eq!(julian_day_number(date(-4713, 12, 31)), 37);
    }
}
