//! Month calendar with a lunar annotation under every solar day.
//!
//! Weeks start on Sunday, following the layout of a wall calendar.

use std::fmt;
use std::iter;

use serde::Serialize;
use tracing::debug;

use crate::chinese::{LunisolarCalendar, TableCalendar};
use crate::date::{Date, SolarDate, days_in_month};
use crate::error::InvalidDateError;
use crate::service::DateConversionService;

/// Column headings, Sunday first.
pub const WEEK_HEADER: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// One day of the month.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DayCell {
    pub day: u32,
    /// Lunar day name, or the lunar month name on the first of a lunar month.
    /// Empty when the day could not be converted.
    pub lunar_label: String,
    pub highlighted: bool,
}

/// A month laid out in weeks; `None` cells pad before the 1st and after the
/// last day.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthGrid {
    /// Number of empty cells before the 1st.
    pub fn leading_blanks(&self) -> usize {
        self.weeks
            .first()
            .map_or(0, |week| week.iter().take_while(|c| c.is_none()).count())
    }

    /// All day cells in order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }

    pub fn highlighted(&self) -> Option<&DayCell> {
        self.days().find(|cell| cell.highlighted)
    }
}

/// Lays out month grids, annotating each day through a [`DateConversionService`].
#[derive(Debug, Default, Copy, Clone)]
pub struct MonthCalendarRenderer<C = TableCalendar> {
    service: DateConversionService<C>,
}

impl MonthCalendarRenderer<TableCalendar> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: LunisolarCalendar> MonthCalendarRenderer<C> {
    /// Annotates days through `service` instead of the default table.
    pub fn with_service(service: DateConversionService<C>) -> Self {
        Self { service }
    }

    /// Renders `year`-`month` (Gregorian), flagging `highlight_day` if it falls
    /// in the month.
    ///
    /// Fails if `month` is not `1..=12` or the year is beyond
    /// [`MAX_GREGORIAN_YEAR`](crate::date::MAX_GREGORIAN_YEAR). A day whose lunar date cannot
    /// be found gets an empty label; the rest of the grid is still returned.
    ///
    /// # Example
    ///
    /// ```
    /// use wannianli::month_view::MonthCalendarRenderer;
    ///
    /// let grid = MonthCalendarRenderer::new()
    ///     .render_month(2024, 2, Some(10))
    ///     .unwrap();
    /// assert_eq!(4, grid.leading_blanks()); // 2024-02-01 is a Thursday
    /// assert_eq!("正月", grid.highlighted().unwrap().lunar_label);
    /// ```
    pub fn render_month(
        &self,
        year: i32,
        month: u32,
        highlight_day: Option<u32>,
    ) -> Result<MonthGrid, InvalidDateError> {
        let first = Date::from_gregorian(year, month, 1).ok_or(InvalidDateError::Solar {
            year,
            month,
            day: 1,
        })?;
        let leading = (first.day_of_week() % 7) as usize;
        let days = (1..=days_in_month(year, month)).map(|day| {
            Some(DayCell {
                day,
                lunar_label: self.lunar_label(first + (day as i32 - 1)),
                highlighted: highlight_day == Some(day),
            })
        });
        let cells: Vec<_> = iter::repeat_n(None, leading).chain(days).collect();
        let weeks = cells
            .chunks(7)
            .map(|chunk| {
                let mut week: [Option<DayCell>; 7] = Default::default();
                for (slot, cell) in week.iter_mut().zip(chunk) {
                    slot.clone_from(cell);
                }
                week
            })
            .collect();
        debug!(year, month, ?highlight_day, "rendered month");
        Ok(MonthGrid { year, month, weeks })
    }

    fn lunar_label(&self, date: Date) -> String {
        match self.service.convert_solar_to_lunar(SolarDate::from(date)) {
            Ok(res) if res.lunar.day == 1 => res.month_name,
            Ok(res) => res.day_name.to_owned(),
            // best effort: an unconvertible day stays blank instead of failing the month
            Err(err) => {
                debug!(%err, date = %date.iso_gregorian(), "no lunar label");
                String::new()
            }
        }
    }
}

/// Plain-text grid; `*` marks the highlighted day.
impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}年 {}月", self.year, self.month)?;
        let header: Vec<_> = WEEK_HEADER
            .iter()
            .map(|h| format!(" {}", pad_wide(h, 4)))
            .collect();
        writeln!(f, "{}", header.join(" ").trim_end())?;
        for week in &self.weeks {
            let line: Vec<_> = week
                .iter()
                .map(|cell| match cell {
                    Some(cell) => format!(
                        "{:>2}{}{}",
                        cell.day,
                        if cell.highlighted { '*' } else { ' ' },
                        pad_wide(&cell.lunar_label, 3)
                    ),
                    None => pad_wide("", 4) + " ",
                })
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Pads a string of full-width characters to `width` of them.
fn pad_wide(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.chars().count());
    s.to_owned() + &"\u{3000}".repeat(fill)
}
