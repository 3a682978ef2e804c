//! Era handling for entered years: Gregorian (西元) or Republic of China (民國).
//!
//! A year typed into the form carries no era selector. Anything below
//! [`ROC_THRESHOLD`] is read as a Republic-of-China year, everything else as
//! Gregorian. Every caller goes through [`normalize_era_year`] so the
//! threshold cannot drift between call sites.

use std::fmt;

use serde::Serialize;

/// Raw years below this are Republic-of-China years.
pub const ROC_THRESHOLD: i32 = 1900;

/// Gregorian year = ROC year + `ROC_OFFSET` (ROC 1 = 1912).
pub const ROC_OFFSET: i32 = 1911;

/// Converts a raw entered year into a Gregorian year.
///
/// # Example
///
/// ```
/// use wannianli::era::normalize_era_year;
///
/// assert_eq!(2024, normalize_era_year(113));
/// assert_eq!(2024, normalize_era_year(2024));
/// assert_eq!(1912, normalize_era_year(1));
/// ```
pub fn normalize_era_year(raw_year: i32) -> i32 {
    if raw_year < ROC_THRESHOLD {
        raw_year + ROC_OFFSET
    } else {
        raw_year
    }
}

/// Republic-of-China year of a Gregorian year. Zero or negative before 1912.
pub fn roc_year(gregorian_year: i32) -> i32 {
    gregorian_year - ROC_OFFSET
}

/// Era the raw year was interpreted in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Gregorian,
    Republic,
}

impl Era {
    /// `西元` or `民國`.
    pub fn label(&self) -> &'static str {
        match self {
            Era::Gregorian => "西元",
            Era::Republic => "民國",
        }
    }
}

/// An entered year together with its inferred era and Gregorian value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct EraYear {
    pub raw: i32,
    pub era: Era,
    pub gregorian: i32,
}

impl EraYear {
    pub fn from_raw(raw: i32) -> Self {
        let era = if raw < ROC_THRESHOLD {
            Era::Republic
        } else {
            Era::Gregorian
        };
        Self {
            raw,
            era,
            gregorian: normalize_era_year(raw),
        }
    }

    /// A year already known to be Gregorian, whatever its value.
    pub fn gregorian(year: i32) -> Self {
        Self {
            raw: year,
            era: Era::Gregorian,
            gregorian: year,
        }
    }

    /// Short hint shown under the year field, e.g. `民國 113 年`.
    pub fn hint(&self) -> String {
        format!("{} {} 年", self.era.label(), self.raw)
    }
}

/// `西元 2024 (民國 113)` for ROC input, `西元 2024` otherwise.
impl fmt::Display for EraYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.era {
            Era::Republic => write!(
                f,
                "{} {} ({} {})",
                Era::Gregorian.label(),
                self.gregorian,
                Era::Republic.label(),
                self.raw
            ),
            Era::Gregorian => write!(f, "{} {}", Era::Gregorian.label(), self.gregorian),
        }
    }
}
