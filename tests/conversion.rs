//! Conversion properties checked through the public API only.

use wannianli::chinese::{LunarDate, Month};
use wannianli::era::normalize_era_year;
use wannianli::form::{self, FormInput, FormOutcome};
use wannianli::month_view::MonthCalendarRenderer;
use wannianli::{Date, DateConversionService, InvalidDateError, Mode, SolarDate};

#[test]
fn solar_lunar_round_trip() {
    let service = DateConversionService::new();
    let first = Date::from_gregorian(1900, 1, 31).unwrap();
    let last = Date::from_gregorian(2100, 12, 31).unwrap();

    let mut date = first;
    while date.jdn() <= last.jdn() {
        let solar = SolarDate::from(date);
        let lunar = service.convert_solar_to_lunar(solar).unwrap().lunar;
        let back = service.convert_lunar_to_solar(lunar).unwrap();
        assert_eq!(solar, back.solar, "{lunar}");
        date = date + 11;
    }
}

#[test]
fn era_years() {
    assert_eq!(2024, normalize_era_year(113));
    assert_eq!(2024, normalize_era_year(2024));
    assert_eq!(1912, normalize_era_year(1));
    assert_eq!(3810, normalize_era_year(1899));
    assert_eq!(1900, normalize_era_year(1900));
}

#[test]
fn lunar_new_year_2024() {
    let res = DateConversionService::new()
        .convert_solar_to_lunar(SolarDate::new(2024, 2, 10))
        .unwrap();
    assert_eq!(LunarDate::new(2024, Month::Common(1), 1), res.lunar);
    assert_eq!("甲辰", res.year_name);
    assert_eq!("龍", res.zodiac);
    assert_eq!("二零二四年正月初一 甲辰年 (龍年)", res.label);
}

#[test]
fn nonexistent_solar_date() {
    let err = DateConversionService::new()
        .convert_solar_to_lunar(SolarDate::new(2024, 2, 30))
        .unwrap_err();
    assert_eq!(
        InvalidDateError::Solar {
            year: 2024,
            month: 2,
            day: 30
        },
        err
    );
}

#[test]
fn leap_months_only_where_they_exist() {
    let service = DateConversionService::new();

    let res = service
        .convert_lunar_to_solar(LunarDate::new(2023, Month::Leap(2), 1))
        .unwrap();
    assert_eq!(SolarDate::new(2023, 3, 22), res.solar);
    assert_eq!("週三", res.weekday);
    assert_eq!(112, res.roc_year);

    assert!(matches!(
        service.convert_lunar_to_solar(LunarDate::new(2024, Month::Leap(2), 1)),
        Err(InvalidDateError::Lunar { leap: true, .. })
    ));
}

#[test]
fn thirtieth_of_a_short_month() {
    let service = DateConversionService::new();
    // 2023 閏二月 has 29 days, 二月 has 30
    assert!(
        service
            .convert_lunar_to_solar(LunarDate::new(2023, Month::Leap(2), 30))
            .is_err()
    );
    assert_eq!(
        SolarDate::new(2023, 3, 21),
        service
            .convert_lunar_to_solar(LunarDate::new(2023, Month::Common(2), 30))
            .unwrap()
            .solar
    );
}

#[test]
fn form_with_roc_year() {
    let input = FormInput {
        mode: Mode::LunarToSolar,
        year: Some(113),
        month: Some(1),
        day: Some(1),
        ..FormInput::default()
    };
    let FormOutcome::Converted(res) = form::evaluate(&DateConversionService::new(), &input) else {
        panic!("expected a conversion");
    };
    assert_eq!(SolarDate::new(2024, 2, 10), res.solar());
    assert_eq!(113, res.entered().raw);
}

#[test]
fn render_month_with_highlight() {
    let grid = MonthCalendarRenderer::new()
        .render_month(2024, 2, Some(10))
        .unwrap();

    assert_eq!(4, grid.leading_blanks());
    let highlighted: Vec<_> = grid.days().filter(|c| c.highlighted).collect();
    assert_eq!(1, highlighted.len());
    assert_eq!(10, highlighted[0].day);
    assert_eq!("正月", highlighted[0].lunar_label);
    assert!(grid.days().all(|c| !c.lunar_label.is_empty()));
}
