//! 格式化日期相關功能
//!
//! 各名稱表皆為全局常量，由轉換模塊共用。

use super::{Month, Sexagenary};

/// 十天干，第 0 項為「甲」。
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 十二地支，第 0 項為「子」。
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 十二生肖，與 [`BRANCHES`] 同序。
pub const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];

/// 月名，第 0 項為正月。十一、十二月稱「冬月」「臘月」。
pub const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月",
    "臘月",
];

/// 日名，第 0 項為「初一」。
pub const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
    "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二",
    "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// 星期名，自週一起。
pub const WEEKDAYS: [&str; 7] = ["週一", "週二", "週三", "週四", "週五", "週六", "週日"];

/// 閏月前綴
pub const LEAP_MARKER: &str = "閏";

/// 逐位寫年份用的數字，第 0 項為「零」。
const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 干支文本，如「甲辰」。
///
/// # 用例
///
/// ```
/// use wannianli::chinese::{self, Sexagenary};
///
/// assert_eq!("甲辰", chinese::fmt::sexagenary(Sexagenary::for_year(2024)));
/// ```
pub fn sexagenary(s: Sexagenary) -> String {
    STEMS[s.stem].to_owned() + BRANCHES[s.branch]
}

/// 生肖
pub fn zodiac(s: Sexagenary) -> &'static str {
    ZODIAC[s.branch]
}

/// 取得月名（含「月」字），閏月前加「閏」。
///
/// # 用例
///
/// ```
/// use wannianli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("閏二月", chinese::fmt::month(Leap(2)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month) -> String {
    try_month(m).unwrap_or_else(|| panic!("month {} not in 1..=12", m.num()))
}

/// 同 [`month`]，月序號不在 `1..=12` 間則返回 `None`。
pub fn try_month(m: Month) -> Option<String> {
    let name = MONTH_NAMES.get((m.num() as usize).wrapping_sub(1))?;
    Some(if m.is_leap() {
        LEAP_MARKER.to_owned() + *name
    } else {
        (*name).to_owned()
    })
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use wannianli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> &'static str {
    try_day(d).unwrap_or_else(|| panic!("day {} not in 1..=30", d))
}

/// 同 [`day`]，日序號不在 `1..=30` 間則返回 `None`。
pub fn try_day(d: u32) -> Option<&'static str> {
    DAY_NAMES.get((d as usize).wrapping_sub(1)).copied()
}

/// ISO 星期序號（`1..=7`，週一至週日）轉為名稱。
pub fn weekday(iso: u32) -> &'static str {
    WEEKDAYS[(iso as usize + 6) % 7]
}

/// 逐位寫出年份，如 2024 寫作「二零二四」。
///
/// ```
/// use wannianli::chinese;
///
/// assert_eq!("二零二四", chinese::fmt::year_digits(2024));
/// ```
pub fn year_digits(year: i32) -> String {
    year.unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, year) in [("甲子", 1984), ("庚辰", 2000), ("癸卯", 2023), ("甲辰", 2024)] {
            assert_eq!(std, sexagenary(Sexagenary::for_year(year)), "{year}");
        }
        assert_eq!("龍", zodiac(Sexagenary::for_year(2024)));
        assert_eq!("兔", zodiac(Sexagenary::for_year(2023)));
    }

    #[test]
    fn test_month() {
        assert_eq!("正月", month(Month::Common(1)));
        assert_eq!("臘月", month(Month::Common(12)));
        assert_eq!("閏六月", month(Month::Leap(6)));
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    #[should_panic]
    fn day_out_of_table() {
        day(0);
    }

    #[test]
    fn out_of_table_names() {
        assert_eq!(None, try_month(Month::Common(13)));
        assert_eq!(None, try_day(31));
        assert_eq!(Some("閏四月".to_owned()), try_month(Month::Leap(4)));
    }

    #[test]
    fn test_weekday() {
        assert_eq!("週一", weekday(1));
        assert_eq!("週三", weekday(3));
        assert_eq!("週日", weekday(7));
    }

    #[test]
    fn test_year_digits() {
        assert_eq!("一九一二", year_digits(1912));
        assert_eq!("二一零零", year_digits(2100));
    }
}
