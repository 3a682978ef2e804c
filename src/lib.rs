//! Conversion between Gregorian (solar) dates and Chinese lunisolar dates,
//! as used by the 萬年曆 form: enter a date in either calendar, get the
//! date in the other, optionally with a small month calendar.
//!
//! Years below 1900 are read as Republic-of-China (民國) years, see
//! [`era`]. The lunisolar calendar itself comes from a year table covering
//! lunar years 1900 through 2100, see [`chinese::table`].
//!
//! # Examples
//!
//! Solar to lunar:
//!
//! ```
//! use wannianli::{DateConversionService, SolarDate};
//!
//! let service = DateConversionService::new();
//! let res = service.convert_solar_to_lunar(SolarDate::new(2024, 2, 10)).unwrap();
//!
//! assert_eq!("甲辰", res.year_name);
//! assert_eq!("正月", res.month_name);
//! assert_eq!("初一", res.day_name);
//! ```
//!
//! Lunar to solar, with a leap month:
//!
//! ```
//! use wannianli::chinese::{LunarDate, Month};
//! use wannianli::{DateConversionService, SolarDate};
//!
//! let service = DateConversionService::new();
//! let res = service
//!     .convert_lunar_to_solar(LunarDate::new(2023, Month::Leap(2), 1))
//!     .unwrap();
//!
//! assert_eq!(SolarDate::new(2023, 3, 22), res.solar);
//! assert_eq!("週三", res.weekday);
//! ```

pub mod chinese;
pub mod config;
pub mod date;
pub mod era;
pub mod error;
pub mod form;
pub mod month_view;
pub mod service;
pub mod web;

pub use date::{Date, SolarDate, YearType};
pub use error::InvalidDateError;
pub use service::{ConversionResult, DateConversionService, Mode};
