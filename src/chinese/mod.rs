//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 農曆推算本身不在此處實現，而是經由 [`LunisolarCalendar`] 這一窄接口委託給具體算法；
//! 本 crate 自帶的算法見 [`table`]。

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::InvalidDateError;

pub mod fmt;
pub mod table;

pub use table::TableCalendar;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 依月序號及是否閏月建立。
    pub fn new(num: u32, leap: bool) -> Self {
        if leap {
            Month::Leap(num)
        } else {
            Month::Common(num)
        }
    }
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 農曆日期。`year` 為農曆年所對應的公元年（正月初一所在年）。
///
/// 僅當該年確有閏 `month` 月時，`leap` 方可為 `true`，否則轉換失敗。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: Month, day: u32) -> Self {
        Self {
            year,
            month: month.num(),
            day,
            leap: month.is_leap(),
        }
    }
    /// 平閏月名
    pub fn month(&self) -> Month {
        Month::new(self.month, self.leap)
    }
    /// 轉換失敗時回報的錯誤
    pub(crate) fn invalid(&self) -> InvalidDateError {
        InvalidDateError::Lunar {
            year: self.year,
            month: self.month,
            day: self.day,
            leap: self.leap,
        }
    }
}

/// 形如「二零二三年閏二月初一」；月日超出名稱表時退回數字形式。
impl Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (fmt::try_month(self.month()), fmt::try_day(self.day)) {
            (Some(month), Some(day)) => {
                write!(f, "{}年{}{}", fmt::year_digits(self.year), month, day)
            }
            _ => write!(
                f,
                "{}/{}{}/{}",
                self.year,
                if self.leap { fmt::LEAP_MARKER } else { "" },
                self.month,
                self.day
            ),
        }
    }
}

/// 年干支，`stem`、`branch` 分別為 [`fmt::STEMS`]、[`fmt::BRANCHES`] 的下標。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sexagenary {
    pub stem: usize,
    pub branch: usize,
}

impl Sexagenary {
    /// 取得所給農曆年的干支。公元 4 年為甲子年。
    ///
    /// # 用例
    ///
    /// ```
    /// use wannianli::chinese::Sexagenary;
    ///
    /// let s = Sexagenary::for_year(2024);
    /// assert_eq!((0, 4), (s.stem, s.branch)); // 甲辰
    /// ```
    pub fn for_year(year: i32) -> Self {
        Self {
            stem: (year - 4).rem_euclid(10) as usize,
            branch: (year - 4).rem_euclid(12) as usize,
        }
    }
    /// 在六十甲子中的序號，1 (甲子) 至 60 (癸亥)。
    pub fn cycle_number(&self) -> u32 {
        ((6 * self.stem as i32 - 5 * self.branch as i32).rem_euclid(60) + 1) as u32
    }
}

/// 公曆與農曆互換的窄接口。
///
/// 兩個方向皆可能失敗：日期超出算法支持範圍，或該農曆年並無所給月日（含並無所給閏月）。
/// 閏月以結構化的 [`LunarDate::leap`] 表示，不依賴任何格式化文本。
pub trait LunisolarCalendar {
    /// 公曆轉農曆
    fn to_lunar(&self, date: Date) -> Result<LunarDate, InvalidDateError>;
    /// 農曆轉公曆
    fn to_solar(&self, lunar: LunarDate) -> Result<Date, InvalidDateError>;
}
