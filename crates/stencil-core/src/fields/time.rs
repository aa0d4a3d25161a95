//! Clock field formatters.
//!
//! The seconds family comes in three precisions. [`second`] floors to whole
//! seconds and [`second_ms`] floors to milliseconds; neither rounds up.
//! [`second_precise`] keeps the full available subsecond precision,
//! dropping trailing zero groups so that millisecond- and
//! microsecond-precision values print 3 and 6 fractional digits.

use jiff::civil::DateTime;

/// Two-digit hour on the 24-hour clock, `00` through `23`.
pub fn hour(value: &DateTime) -> String {
    format!("{:02}", value.hour())
}

/// Two-digit hour on the 12-hour clock, `01` through `12`.
pub fn hour12(value: &DateTime) -> String {
    let h = (value.hour() + 11) % 12 + 1;
    format!("{h:02}")
}

/// Two-digit minute, `00` through `59`.
pub fn minute(value: &DateTime) -> String {
    format!("{:02}", value.minute())
}

/// Two-digit whole seconds, fraction discarded.
pub fn second(value: &DateTime) -> String {
    format!("{:02}", value.second())
}

/// Seconds floored to milliseconds: two integer digits and exactly three
/// fractional digits, zero-padded (`05.000`, `23.723`).
pub fn second_ms(value: &DateTime) -> String {
    format!(
        "{:02}.{:03}",
        value.second(),
        value.subsec_nanosecond() / 1_000_000
    )
}

/// Seconds with the full available subsecond precision, unrounded.
///
/// A whole second prints with no fractional part at all. Otherwise the
/// fraction prints with 3, 6, or 9 digits, whichever is the smallest that
/// loses nothing (`23`, `23.723`, `23.723615`, `23.723615001`).
pub fn second_precise(value: &DateTime) -> String {
    let secs = value.second();
    let nanos = value.subsec_nanosecond();
    if nanos == 0 {
        format!("{secs:02}")
    } else if nanos % 1_000_000 == 0 {
        format!("{secs:02}.{:03}", nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        format!("{secs:02}.{:06}", nanos / 1_000)
    } else {
        format!("{secs:02}.{nanos:09}")
    }
}

/// `AM` or `PM`.
pub fn meridiem(value: &DateTime) -> String {
    if value.hour() < 12 { "AM" } else { "PM" }.to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil;

    use super::*;

    #[test]
    fn test_hour_fields() {
        let midnight = civil::datetime(2024, 1, 26, 0, 5, 0, 0);
        assert_eq!(hour(&midnight), "00");
        assert_eq!(hour12(&midnight), "12");
        assert_eq!(meridiem(&midnight), "AM");

        let noon = civil::datetime(2024, 1, 26, 12, 5, 0, 0);
        assert_eq!(hour(&noon), "12");
        assert_eq!(hour12(&noon), "12");
        assert_eq!(meridiem(&noon), "PM");

        let evening = civil::datetime(2024, 1, 26, 23, 5, 0, 0);
        assert_eq!(hour(&evening), "23");
        assert_eq!(hour12(&evening), "11");
        assert_eq!(meridiem(&evening), "PM");
    }

    #[test]
    fn test_minute_is_zero_padded() {
        let value = civil::datetime(2024, 1, 26, 11, 7, 0, 0);
        assert_eq!(minute(&value), "07");
    }

    #[test]
    fn test_second_discards_fraction() {
        let value = civil::datetime(2024, 1, 26, 11, 57, 23, 999_999_999);
        assert_eq!(second(&value), "23");
    }

    #[test]
    fn test_second_ms_floors_and_pads() {
        let value = civil::datetime(2024, 1, 26, 11, 57, 23, 723_615_000);
        assert_eq!(second_ms(&value), "23.723");

        let whole = civil::datetime(2024, 1, 26, 11, 57, 5, 0);
        assert_eq!(second_ms(&whole), "05.000");

        let tiny = civil::datetime(2024, 1, 26, 11, 57, 5, 1_000_000);
        assert_eq!(second_ms(&tiny), "05.001");
    }

    #[test]
    fn test_second_precise_keeps_available_precision() {
        let micros = civil::datetime(2024, 1, 26, 11, 57, 23, 723_615_000);
        assert_eq!(second_precise(&micros), "23.723615");

        let millis = civil::datetime(2024, 1, 26, 11, 57, 23, 723_000_000);
        assert_eq!(second_precise(&millis), "23.723");

        let nanos = civil::datetime(2024, 1, 26, 11, 57, 23, 723_615_001);
        assert_eq!(second_precise(&nanos), "23.723615001");

        let whole = civil::datetime(2024, 1, 26, 11, 57, 23, 0);
        assert_eq!(second_precise(&whole), "23");
    }

    #[test]
    fn test_second_precise_pads_small_fractions() {
        let value = civil::datetime(2024, 1, 26, 11, 57, 23, 1_000);
        assert_eq!(second_precise(&value), "23.000001");
    }
}
