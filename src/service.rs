//! Solar ⇄ lunar conversion with the derived display fields.
//!
//! [`DateConversionService`] is stateless: it owns a [`LunisolarCalendar`]
//! (the table algorithm by default) and turns each request into a value
//! object, or a single [`InvalidDateError`]. No partial results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chinese::{self, LunarDate, LunisolarCalendar, Sexagenary, TableCalendar};
use crate::date::SolarDate;
use crate::era::{self, EraYear};
use crate::error::InvalidDateError;

/// Direction of a conversion.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// 國曆 轉 農曆
    #[default]
    #[serde(rename = "solar")]
    SolarToLunar,
    /// 農曆 轉 國曆
    #[serde(rename = "lunar")]
    LunarToSolar,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::SolarToLunar => "國曆 轉 農曆",
            Mode::LunarToSolar => "農曆 轉 國曆",
        }
    }
    /// Value used in query strings.
    pub fn wire(&self) -> &'static str {
        match self {
            Mode::SolarToLunar => "solar",
            Mode::LunarToSolar => "lunar",
        }
    }
}

/// A complete request, year still as entered (possibly an ROC year).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ConversionRequest {
    pub mode: Mode,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Only read for [`Mode::LunarToSolar`].
    pub leap: bool,
}

/// Result of a solar → lunar conversion.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LunarConversion {
    pub entered: EraYear,
    pub input: SolarDate,
    pub lunar: LunarDate,
    /// 干支, e.g. `甲辰`
    pub year_name: String,
    pub zodiac: &'static str,
    /// Leap-prefixed when the month is a leap month.
    pub month_name: String,
    pub day_name: &'static str,
    /// e.g. `二零二四年正月初一 甲辰年 (龍年)`
    pub label: String,
}

/// Result of a lunar → solar conversion.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SolarConversion {
    pub entered: EraYear,
    pub input: LunarDate,
    pub solar: SolarDate,
    pub roc_year: i32,
    pub weekday: &'static str,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "direction", rename_all = "snake_case")]
pub enum ConversionResult {
    ToLunar(LunarConversion),
    ToSolar(SolarConversion),
}

impl ConversionResult {
    pub fn entered(&self) -> EraYear {
        match self {
            ConversionResult::ToLunar(c) => c.entered,
            ConversionResult::ToSolar(c) => c.entered,
        }
    }
    /// The Gregorian side of the conversion, whichever direction it ran.
    pub fn solar(&self) -> SolarDate {
        match self {
            ConversionResult::ToLunar(c) => c.input,
            ConversionResult::ToSolar(c) => c.solar,
        }
    }
}

/// Converts between Gregorian and Chinese lunisolar dates.
///
/// # Example
///
/// ```
/// use wannianli::{DateConversionService, SolarDate};
///
/// let service = DateConversionService::new();
/// let res = service.convert_solar_to_lunar(SolarDate::new(2024, 2, 10)).unwrap();
/// assert_eq!("二零二四年正月初一 甲辰年 (龍年)", res.label);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct DateConversionService<C = TableCalendar> {
    calendar: C,
}

impl DateConversionService<TableCalendar> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: LunisolarCalendar> DateConversionService<C> {
    /// Uses another lunisolar algorithm.
    pub fn with_calendar(calendar: C) -> Self {
        Self { calendar }
    }

    /// Normalises the entered year, then converts in the requested direction.
    pub fn convert(&self, request: ConversionRequest) -> Result<ConversionResult, InvalidDateError> {
        let entered = EraYear::from_raw(request.year);
        let year = era::normalize_era_year(request.year);
        match request.mode {
            Mode::SolarToLunar => {
                let mut res =
                    self.convert_solar_to_lunar(SolarDate::new(year, request.month, request.day))?;
                res.entered = entered;
                Ok(ConversionResult::ToLunar(res))
            }
            Mode::LunarToSolar => {
                let lunar = LunarDate {
                    year,
                    month: request.month,
                    day: request.day,
                    leap: request.leap,
                };
                let mut res = self.convert_lunar_to_solar(lunar)?;
                res.entered = entered;
                Ok(ConversionResult::ToSolar(res))
            }
        }
    }

    /// `solar.year` must already be Gregorian.
    pub fn convert_solar_to_lunar(
        &self,
        solar: SolarDate,
    ) -> Result<LunarConversion, InvalidDateError> {
        let date = solar.to_date()?;
        let lunar = self.calendar.to_lunar(date)?;
        let month = lunar.month();
        let (month_name, day_name) = chinese::fmt::try_month(month)
            .zip(chinese::fmt::try_day(lunar.day))
            .ok_or_else(|| lunar.invalid())?;
        let sexagenary = Sexagenary::for_year(lunar.year);
        let year_name = chinese::fmt::sexagenary(sexagenary);
        let zodiac = chinese::fmt::zodiac(sexagenary);
        let label = format!("{lunar} {year_name}年 ({zodiac}年)");
        debug!(%solar, %label, "solar to lunar");
        Ok(LunarConversion {
            entered: EraYear::gregorian(solar.year),
            input: solar,
            lunar,
            year_name,
            zodiac,
            month_name,
            day_name,
            label,
        })
    }

    /// `lunar.year` must already be Gregorian.
    pub fn convert_lunar_to_solar(
        &self,
        lunar: LunarDate,
    ) -> Result<SolarConversion, InvalidDateError> {
        let date = self.calendar.to_solar(lunar)?;
        let solar = SolarDate::from(date);
        debug!(?lunar, %solar, "lunar to solar");
        Ok(SolarConversion {
            entered: EraYear::gregorian(lunar.year),
            input: lunar,
            solar,
            roc_year: era::roc_year(solar.year),
            weekday: chinese::fmt::weekday(date.day_of_week()),
        })
    }
}
