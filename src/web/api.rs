//! JSON handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::era::normalize_era_year;
use crate::form::{self, FormInput, FormOutcome};
use crate::web::error::ApiError;
use crate::web::state::AppState;

/// `GET /api/convert`: same fields as the form.
///
/// Answers the conversion result, `{"status": "awaiting_input"}` while a
/// field is missing, or a 422 error.
pub async fn convert(
    State(state): State<AppState>,
    Query(input): Query<FormInput>,
) -> Result<Response, ApiError> {
    match form::evaluate(&state.service, &input) {
        FormOutcome::Converted(res) => Ok(Json(res).into_response()),
        FormOutcome::AwaitingInput => Ok(Json(json!({ "status": "awaiting_input" })).into_response()),
        FormOutcome::Invalid(err) => Err(err.into()),
    }
}

/// Query for [`month`]. `year` follows the same era rule as the form.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
    pub highlight: Option<u32>,
}

/// `GET /api/month`: month grid with lunar labels.
pub async fn month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Response, ApiError> {
    form::check_month_bounds(query.year, query.month, query.highlight)?;
    let grid = state.renderer().render_month(
        normalize_era_year(query.year),
        query.month,
        query.highlight,
    )?;
    Ok(Json(grid).into_response())
}
