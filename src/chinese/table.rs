//! 1900 至 2100 年農曆年表
//!
//! 即 calendar.js 等常用農曆庫所附的年表。每年一項，按位編碼：
//!
//! - 第 0..=3 位：閏月序號，0 表示該年無閏月
//! - 第 4..=15 位：自第 15 位起依次為正月至臘月，置位為大月（三十日），否則為小月（二十九日）
//! - 第 16 位：閏月為大月
//!
//! 起算點為 1900 年 1 月 31 日，即農曆 1900 年正月初一。

use super::{LunarDate, LunisolarCalendar, Month};
use crate::date::Date;
use crate::error::InvalidDateError;

/// 年表首年
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年
pub const LAST_YEAR: i32 = 2100;

/// 1900-01-31 的儒略日數
const EPOCH_JDN: u32 = 2415051;

#[rustfmt::skip]
static YEAR_INFO: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// 一個農曆年的月份佈局
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LunarYear {
    /// 正月初一所在公元年
    pub year: i32,
    info: u32,
}

impl LunarYear {
    /// 取得農曆 `year` 年，年表無該年則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use wannianli::chinese::table::LunarYear;
    ///
    /// let year = LunarYear::get(2023).unwrap();
    /// assert_eq!(Some(2), year.leap_month());
    /// assert!(LunarYear::get(2101).is_none());
    /// ```
    pub fn get(year: i32) -> Option<Self> {
        let idx = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
        YEAR_INFO.get(idx).map(|&info| Self { year, info })
    }

    /// 閏月序號，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.info & 0xf {
            0 => None,
            m => Some(m),
        }
    }

    /// 所給月的日數；該年無此月（含無此閏月）則返回 `None`。
    pub fn month_days(&self, month: Month) -> Option<u32> {
        let num = month.num();
        if !(1..=12).contains(&num) {
            return None;
        }
        match month {
            Month::Common(m) => Some(self.common_days(m)),
            Month::Leap(m) if self.leap_month() == Some(m) => Some(self.leap_days()),
            Month::Leap(_) => None,
        }
    }

    /// 全年日數
    pub fn days(&self) -> u32 {
        self.months().map(|(_, len)| len).sum()
    }

    /// 依次列出全年各月及其日數，閏月緊隨同序號的平月之後。
    pub fn months(&self) -> impl Iterator<Item = (Month, u32)> {
        let year = *self;
        (1..=12).flat_map(move |m| {
            let leap = (year.leap_month() == Some(m)).then(|| (Month::Leap(m), year.leap_days()));
            std::iter::once((Month::Common(m), year.common_days(m))).chain(leap)
        })
    }

    fn common_days(&self, month: u32) -> u32 {
        if self.info & (0x10000 >> month) != 0 {
            30
        } else {
            29
        }
    }

    fn leap_days(&self) -> u32 {
        if self.info & 0x10000 != 0 { 30 } else { 29 }
    }
}

/// 年表起算日，即農曆 1900 年正月初一。
pub fn epoch() -> Date {
    Date::from_jdn(EPOCH_JDN)
}

/// 以 [`LunarYear`] 年表實現的農曆算法，支持農曆 1900 至 2100 年。
///
/// # 用例
///
/// ```
/// use wannianli::Date;
/// use wannianli::chinese::{LunisolarCalendar, Month, TableCalendar};
///
/// let date = Date::from_gregorian(2023, 3, 22).unwrap();
/// let lunar = TableCalendar.to_lunar(date).unwrap();
/// assert_eq!((2023, Month::Leap(2), 1), (lunar.year, lunar.month(), lunar.day));
/// assert_eq!(date, TableCalendar.to_solar(lunar).unwrap());
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct TableCalendar;

impl LunisolarCalendar for TableCalendar {
    fn to_lunar(&self, date: Date) -> Result<LunarDate, InvalidDateError> {
        let out_of_range = || InvalidDateError::OutOfRange {
            year: date.gregorian().0,
        };
        let mut offset = u32::try_from(date - epoch()).map_err(|_| out_of_range())?;
        for year in (FIRST_YEAR..=LAST_YEAR).filter_map(LunarYear::get) {
            let days = year.days();
            if offset >= days {
                offset -= days;
                continue;
            }
            for (month, len) in year.months() {
                if offset < len {
                    return Ok(LunarDate::new(year.year, month, offset + 1));
                }
                offset -= len;
            }
        }
        Err(out_of_range())
    }

    fn to_solar(&self, lunar: LunarDate) -> Result<Date, InvalidDateError> {
        let year = LunarYear::get(lunar.year)
            .ok_or(InvalidDateError::OutOfRange { year: lunar.year })?;
        let month = lunar.month();
        let len = year.month_days(month).ok_or_else(|| lunar.invalid())?;
        if lunar.day == 0 || lunar.day > len {
            return Err(lunar.invalid());
        }
        let before_year: u32 = (FIRST_YEAR..lunar.year)
            .filter_map(LunarYear::get)
            .map(|y| y.days())
            .sum();
        let before_month: u32 = year
            .months()
            .take_while(|&(m, _)| m != month)
            .map(|(_, len)| len)
            .sum();
        Ok(epoch() + (before_year + before_month + lunar.day - 1) as i32)
    }
}
