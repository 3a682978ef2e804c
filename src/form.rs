//! The conversion form: raw field values in, a displayable outcome out.
//!
//! Fields may be left empty. An incomplete form is not an error, it simply
//! waits for input and no conversion is attempted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};
use tracing::warn;

use crate::chinese::LunisolarCalendar;
use crate::era::EraYear;
use crate::error::InvalidDateError;
use crate::service::{ConversionRequest, ConversionResult, DateConversionService, Mode};

pub const YEAR_BOUNDS: (i32, i32) = (1, 2100);
pub const MONTH_BOUNDS: (u32, u32) = (1, 12);
pub const DAY_BOUNDS: (u32, u32) = (1, 31);

/// Shown instead of a result when conversion fails.
pub const INVALID_MESSAGE: &str = "⚠️ 日期無效，請檢查輸入";
/// Shown while any of year, month or day is missing.
pub const AWAITING_MESSAGE: &str = "請輸入完整 年、月、日 以進行轉換";

/// Raw form fields. Empty strings deserialize as absent.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub month: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub day: Option<u32>,
    /// Leap-month checkbox, lunar → solar only.
    #[serde(default, deserialize_with = "checkbox")]
    pub leap: bool,
    /// Ask for the month calendar under the result.
    #[serde(default, deserialize_with = "checkbox")]
    pub calendar: bool,
}

impl FormInput {
    /// `Ok(None)` while incomplete; bounds are checked once all three fields
    /// are present.
    pub fn request(&self) -> Result<Option<ConversionRequest>, InvalidDateError> {
        let (Some(year), Some(month), Some(day)) = (self.year, self.month, self.day) else {
            return Ok(None);
        };
        check_bounds("year", year, YEAR_BOUNDS)?;
        check_bounds("month", month, MONTH_BOUNDS)?;
        check_bounds("day", day, DAY_BOUNDS)?;
        Ok(Some(ConversionRequest {
            mode: self.mode,
            year,
            month,
            day,
            leap: self.mode == Mode::LunarToSolar && self.leap,
        }))
    }

    /// Hint under the year field: `民國 113 年` / `西元 2024 年`.
    pub fn year_hint(&self) -> Option<String> {
        self.year.map(|year| EraYear::from_raw(year).hint())
    }
}

/// Checks a month-calendar request against the form's field bounds.
/// `year` is the raw entered year, before era normalisation.
///
/// ```
/// use wannianli::form::check_month_bounds;
///
/// assert!(check_month_bounds(113, 2, Some(10)).is_ok());
/// assert!(check_month_bounds(2_000_000_000, 1, None).is_err());
/// ```
pub fn check_month_bounds(
    year: i32,
    month: u32,
    highlight: Option<u32>,
) -> Result<(), InvalidDateError> {
    check_bounds("year", year, YEAR_BOUNDS)?;
    check_bounds("month", month, MONTH_BOUNDS)?;
    if let Some(day) = highlight {
        check_bounds("highlight", day, DAY_BOUNDS)?;
    }
    Ok(())
}

fn check_bounds<T>(field: &'static str, value: T, (min, max): (T, T)) -> Result<(), InvalidDateError>
where
    T: PartialOrd + Into<i64> + Copy,
{
    if value < min || value > max {
        return Err(InvalidDateError::InputBounds {
            field,
            value: value.into(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FormOutcome {
    AwaitingInput,
    Converted(ConversionResult),
    Invalid(InvalidDateError),
}

/// Runs the form through the service. Never fails: errors become
/// [`FormOutcome::Invalid`].
pub fn evaluate<C: LunisolarCalendar>(
    service: &DateConversionService<C>,
    input: &FormInput,
) -> FormOutcome {
    let converted = input
        .request()
        .and_then(|req| req.map(|req| service.convert(req)).transpose());
    match converted {
        Ok(Some(res)) => FormOutcome::Converted(res),
        Ok(None) => FormOutcome::AwaitingInput,
        Err(err) => {
            warn!(%err, ?input, "conversion rejected");
            FormOutcome::Invalid(err)
        }
    }
}

/// The result box: what was entered and what it converts to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResultPanel {
    pub input_heading: &'static str,
    pub input_line: String,
    pub output_heading: &'static str,
    pub output_line: String,
    pub detail: Option<String>,
}

impl From<&ConversionResult> for ResultPanel {
    fn from(res: &ConversionResult) -> Self {
        match res {
            ConversionResult::ToLunar(c) => ResultPanel {
                input_heading: "【輸入國曆】",
                input_line: format!("{} 年 {} 月 {} 日", c.entered, c.input.month, c.input.day),
                output_heading: "【轉換農曆】",
                output_line: c.label.clone(),
                detail: None,
            },
            ConversionResult::ToSolar(c) => ResultPanel {
                input_heading: "【輸入農曆】",
                input_line: format!(
                    "{} 年 {} 月 {} 日{}",
                    c.entered,
                    c.input.month,
                    c.input.day,
                    if c.input.leap { " (閏)" } else { "" }
                ),
                output_heading: "【轉換國曆】",
                output_line: format!(
                    "西元 {} 年 {} 月 {} 日",
                    c.solar.year, c.solar.month, c.solar.day
                ),
                detail: Some(format!("(民國 {} 年) {}", c.roc_year, c.weekday)),
            },
        }
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.input_heading)?;
        writeln!(f, "{}", self.input_line)?;
        writeln!(f, "{}", self.output_heading)?;
        write!(f, "{}", self.output_line)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n{detail}")?;
        }
        Ok(())
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s.trim().parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("" | "off" | "false" | "0") => Ok(false),
        Some("on" | "true" | "1") => Ok(true),
        Some(other) => Err(de::Error::custom(format!("not a checkbox value: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::SolarDate;

    fn input(mode: Mode, year: i32, month: u32, day: u32, leap: bool) -> FormInput {
        FormInput {
            mode,
            year: Some(year),
            month: Some(month),
            day: Some(day),
            leap,
            calendar: false,
        }
    }

    #[test]
    fn incomplete_form_waits() {
        let service = DateConversionService::new();
        let mut form = input(Mode::SolarToLunar, 2024, 2, 10, false);
        form.day = None;
        assert_eq!(FormOutcome::AwaitingInput, evaluate(&service, &form));
        assert_eq!(FormOutcome::AwaitingInput, evaluate(&service, &FormInput::default()));
    }

    #[test]
    fn out_of_bounds_is_invalid() {
        let service = DateConversionService::new();
        let outcome = evaluate(&service, &input(Mode::SolarToLunar, 2024, 13, 1, false));
        assert_eq!(
            FormOutcome::Invalid(InvalidDateError::InputBounds {
                field: "month",
                value: 13
            }),
            outcome
        );
        let outcome = evaluate(&service, &input(Mode::SolarToLunar, 0, 1, 1, false));
        assert!(matches!(outcome, FormOutcome::Invalid(_)));
    }

    #[test]
    fn leap_ignored_for_solar_input() {
        let req = input(Mode::SolarToLunar, 2024, 2, 10, true)
            .request()
            .unwrap()
            .unwrap();
        assert!(!req.leap);
    }

    #[test]
    fn solar_panel() {
        let service = DateConversionService::new();
        let FormOutcome::Converted(res) =
            evaluate(&service, &input(Mode::SolarToLunar, 113, 2, 10, false))
        else {
            panic!("expected a conversion");
        };
        let panel = ResultPanel::from(&res);
        assert_eq!("【輸入國曆】", panel.input_heading);
        assert_eq!("西元 2024 (民國 113) 年 2 月 10 日", panel.input_line);
        assert_eq!("二零二四年正月初一 甲辰年 (龍年)", panel.output_line);
        assert_eq!(None, panel.detail);
    }

    #[test]
    fn lunar_panel() {
        let service = DateConversionService::new();
        let FormOutcome::Converted(res) =
            evaluate(&service, &input(Mode::LunarToSolar, 2023, 2, 1, true))
        else {
            panic!("expected a conversion");
        };
        assert_eq!(SolarDate::new(2023, 3, 22), res.solar());
        let panel = ResultPanel::from(&res);
        assert_eq!("西元 2023 年 2 月 1 日 (閏)", panel.input_line);
        assert_eq!("西元 2023 年 3 月 22 日", panel.output_line);
        assert_eq!(Some("(民國 112 年) 週三".to_owned()), panel.detail);
        assert_eq!(
            "【輸入農曆】\n西元 2023 年 2 月 1 日 (閏)\n【轉換國曆】\n西元 2023 年 3 月 22 日\n(民國 112 年) 週三",
            panel.to_string()
        );
    }

    #[test]
    fn nonexistent_leap_month_is_invalid() {
        let service = DateConversionService::new();
        let outcome = evaluate(&service, &input(Mode::LunarToSolar, 2024, 2, 1, true));
        assert!(matches!(
            outcome,
            FormOutcome::Invalid(InvalidDateError::Lunar { leap: true, .. })
        ));
    }

    #[test]
    fn month_bounds() {
        assert_eq!(Ok(()), check_month_bounds(2024, 2, None));
        assert_eq!(Ok(()), check_month_bounds(1, 12, Some(31)));
        assert_eq!(
            Err(InvalidDateError::InputBounds {
                field: "year",
                value: 2_000_000_000
            }),
            check_month_bounds(2_000_000_000, 1, None)
        );
        assert_eq!(
            Err(InvalidDateError::InputBounds {
                field: "year",
                value: -5
            }),
            check_month_bounds(-5, 1, None)
        );
        assert!(check_month_bounds(2024, 0, None).is_err());
        assert_eq!(
            Err(InvalidDateError::InputBounds {
                field: "highlight",
                value: 32
            }),
            check_month_bounds(2024, 1, Some(32))
        );
    }

    #[test]
    fn year_hint() {
        let mut form = FormInput::default();
        assert_eq!(None, form.year_hint());
        form.year = Some(114);
        assert_eq!(Some("民國 114 年".to_owned()), form.year_hint());
        form.year = Some(2025);
        assert_eq!(Some("西元 2025 年".to_owned()), form.year_hint());
    }
}
