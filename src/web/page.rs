//! The conversion form page, rendered server-side from `templates/index.html`.

use askama::Template;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use crate::form::{
    self, AWAITING_MESSAGE, DAY_BOUNDS, FormInput, FormOutcome, INVALID_MESSAGE, MONTH_BOUNDS,
    ResultPanel, YEAR_BOUNDS,
};
use crate::month_view::{MonthGrid, WEEK_HEADER};
use crate::service::Mode;
use crate::web::state::AppState;

/// One radio button of the mode selector.
#[derive(Debug, Clone)]
pub struct ModeChoice {
    pub wire: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// A number input with its bounds and the value to refill.
#[derive(Debug, Clone)]
pub struct NumberField {
    pub name: &'static str,
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub placeholder: &'static str,
    pub value: Option<i64>,
    /// Hint line under the field; `Some("")` keeps an empty line.
    pub hint: Option<String>,
}

/// The box shown instead of a result.
#[derive(Debug, Clone)]
pub struct Notice {
    pub class: &'static str,
    pub text: &'static str,
}

impl Notice {
    pub fn invalid() -> Self {
        Self {
            class: "warning",
            text: INVALID_MESSAGE,
        }
    }

    pub fn awaiting() -> Self {
        Self {
            class: "waiting-box",
            text: AWAITING_MESSAGE,
        }
    }
}

/// The whole page: form, then result (or warning / waiting box), then the
/// optional month calendar.
#[derive(Template)]
#[template(path = "index.html")]
pub struct FormPage {
    pub title: String,
    pub modes: [ModeChoice; 2],
    pub fields: [NumberField; 3],
    pub leap: bool,
    pub leap_mode_label: &'static str,
    /// Offer the calendar checkbox (calendar is not shown by default).
    pub calendar_toggle: bool,
    pub calendar_checked: bool,
    pub panel: Option<ResultPanel>,
    pub notice: Option<Notice>,
    pub calendar: Option<MonthGrid>,
    pub week_header: [&'static str; 7],
}

impl FormPage {
    /// Page for `input` refilled into the form and `outcome` below it.
    pub fn new(title: String, input: &FormInput, outcome: &FormOutcome) -> Self {
        let (panel, notice) = match outcome {
            FormOutcome::Converted(res) => (Some(ResultPanel::from(res)), None),
            FormOutcome::Invalid(_) => (None, Some(Notice::invalid())),
            FormOutcome::AwaitingInput => (None, Some(Notice::awaiting())),
        };
        let modes = [Mode::SolarToLunar, Mode::LunarToSolar].map(|mode| ModeChoice {
            wire: mode.wire(),
            label: mode.label(),
            checked: input.mode == mode,
        });
        let fields = [
            NumberField {
                name: "year",
                label: "年",
                min: YEAR_BOUNDS.0.into(),
                max: YEAR_BOUNDS.1.into(),
                placeholder: "如 114",
                value: input.year.map(i64::from),
                hint: Some(input.year_hint().unwrap_or_default()),
            },
            NumberField {
                name: "month",
                label: "月",
                min: MONTH_BOUNDS.0.into(),
                max: MONTH_BOUNDS.1.into(),
                placeholder: "1~12",
                value: input.month.map(i64::from),
                hint: None,
            },
            NumberField {
                name: "day",
                label: "日",
                min: DAY_BOUNDS.0.into(),
                max: DAY_BOUNDS.1.into(),
                placeholder: "1~31",
                value: input.day.map(i64::from),
                hint: None,
            },
        ];
        Self {
            title,
            modes,
            fields,
            leap: input.leap,
            leap_mode_label: Mode::LunarToSolar.label(),
            calendar_toggle: false,
            calendar_checked: input.calendar,
            panel,
            notice,
            calendar: None,
            week_header: WEEK_HEADER,
        }
    }
}

impl IntoResponse for FormPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: render the form and, when complete, the conversion.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<FormInput>, QueryRejection>,
) -> FormPage {
    let (input, malformed) = match query {
        Ok(Query(input)) => (input, false),
        Err(rejection) => {
            tracing::warn!(%rejection, "malformed form query");
            (FormInput::default(), true)
        }
    };
    let outcome = form::evaluate(&state.service, &input);
    let calendar = match &outcome {
        FormOutcome::Converted(res) if state.display.show_calendar || input.calendar => {
            let solar = res.solar();
            state
                .renderer()
                .render_month(solar.year, solar.month, Some(solar.day))
                .ok()
        }
        _ => None,
    };

    let mut page = FormPage::new(state.display.title.clone(), &input, &outcome);
    if malformed {
        page.notice = Some(Notice::invalid());
    }
    page.calendar_toggle = !state.display.show_calendar;
    page.calendar = calendar;
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::month_view::MonthCalendarRenderer;
    use crate::service::DateConversionService;

    fn page(input: FormInput) -> FormPage {
        let outcome = form::evaluate(&DateConversionService::new(), &input);
        FormPage::new(DisplayConfig::default().title, &input, &outcome)
    }

    #[test]
    fn waiting_page() {
        let html = page(FormInput::default()).render().unwrap();
        assert!(html.contains("<h1>萬年曆轉換系統</h1>"));
        assert!(html.contains(&format!("<div class=\"waiting-box\">{AWAITING_MESSAGE}</div>")));
        assert!(html.contains("value=\"solar\" checked"));
        assert!(!html.contains("value=\"lunar\" checked"));
        assert!(!html.contains("<div class=\"result-box\">"));
        assert!(html.contains("<div class=\"hint-text\">&nbsp;</div>"));
    }

    #[test]
    fn converted_page_keeps_input() {
        let input = FormInput {
            mode: Mode::LunarToSolar,
            year: Some(112),
            month: Some(2),
            day: Some(1),
            leap: true,
            calendar: false,
        };
        let html = page(input).render().unwrap();
        assert!(html.contains("value=\"lunar\" checked"));
        assert!(html.contains(
            "name=\"year\" min=\"1\" max=\"2100\" step=\"1\" placeholder=\"如 114\" value=\"112\""
        ));
        assert!(html.contains("<div class=\"hint-text\">民國 112 年</div>"));
        assert!(html.contains("name=\"leap\" checked"));
        assert!(html.contains("西元 2023 年 3 月 22 日"));
        assert!(html.contains("(民國 112 年) 週三"));
        assert!(!html.contains("class=\"warning\""));
    }

    #[test]
    fn invalid_page() {
        let input = FormInput {
            year: Some(2024),
            month: Some(2),
            day: Some(30),
            ..FormInput::default()
        };
        let html = page(input).render().unwrap();
        assert!(html.contains(&format!("<div class=\"warning\">{INVALID_MESSAGE}</div>")));
        assert!(!html.contains("<div class=\"result-box\">"));
    }

    #[test]
    fn leap_checkbox_hidden_in_solar_mode() {
        let html = page(FormInput::default()).render().unwrap();
        assert!(html.contains("<label class=\"leap\"><input type=\"checkbox\" name=\"leap\">"));
        assert!(html.contains(
            "form:has(input[name=mode][value=solar]:checked) .leap { display: none; }"
        ));
    }

    #[test]
    fn calendar_checkbox_only_when_offered() {
        let mut p = page(FormInput::default());
        assert!(!p.render().unwrap().contains("name=\"calendar\""));
        p.calendar_toggle = true;
        assert!(p.render().unwrap().contains("name=\"calendar\""));
    }

    #[test]
    fn month_table() {
        let mut p = page(FormInput::default());
        p.calendar = MonthCalendarRenderer::new()
            .render_month(2024, 2, Some(10))
            .ok();
        let html = p.render().unwrap();
        assert!(html.contains("<caption>2024年 2月</caption>"));
        assert!(html.contains("<th>日</th><th>一</th>"));
        assert!(html.contains(
            "<td class=\"highlight\"><span class=\"solar\">10</span><span class=\"lunar\">正月</span></td>"
        ));
        assert_eq!(1, html.matches("class=\"highlight\"").count());
        assert!(html.contains(
            "<tr><td></td><td></td><td></td><td></td><td><span class=\"solar\">1</span>"
        ));
    }

    #[test]
    fn escapes_title() {
        let input = FormInput::default();
        let html = FormPage::new("<萬年曆> & \"曆\"".to_owned(), &input, &FormOutcome::AwaitingInput)
            .render()
            .unwrap();
        assert!(html.contains("<h1>&lt;萬年曆&gt; &amp; &quot;曆&quot;</h1>"));
    }
}
