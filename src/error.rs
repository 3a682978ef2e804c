//! The one error a conversion can produce.

use serde::Serialize;

/// A date that does not exist, either in the Gregorian calendar or in the
/// lunisolar calendar of the given year.
///
/// Every variant is the same failure as far as callers are concerned; the
/// variants only let the message say which part of the input was wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidDateError {
    /// The triple is not a real Gregorian date (e.g. February 30).
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    Solar { year: i32, month: u32, day: u32 },
    /// The lunar year has no such month or day, or no such leap month.
    #[error("lunar date {year}/{}{month}/{day} does not exist", if *leap { "leap " } else { "" })]
    Lunar {
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    },
    /// The lunisolar table has no data for the year.
    #[error("year {year} is outside the supported range")]
    OutOfRange { year: i32 },
    /// A raw form field is outside the bounds the form accepts.
    #[error("{field} {value} is out of bounds")]
    InputBounds { field: &'static str, value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = InvalidDateError::Solar {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!("2024-02-30 is not a valid Gregorian date", err.to_string());

        let err = InvalidDateError::Lunar {
            year: 2024,
            month: 2,
            day: 1,
            leap: true,
        };
        assert_eq!("lunar date 2024/leap 2/1 does not exist", err.to_string());

        let err = InvalidDateError::InputBounds {
            field: "month",
            value: 13,
        };
        assert_eq!("month 13 is out of bounds", err.to_string());
    }
}
