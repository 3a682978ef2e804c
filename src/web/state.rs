//! Shared application state for axum handlers.

use std::sync::Arc;

use crate::config::DisplayConfig;
use crate::month_view::MonthCalendarRenderer;
use crate::service::DateConversionService;

/// Application state shared across all axum handlers.
///
/// The conversion service holds no data, so cloning the state per request
/// only bumps the display settings' reference count.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Solar ⇄ lunar conversion.
    pub service: DateConversionService,
    /// Page title and calendar toggle.
    pub display: Arc<DisplayConfig>,
}

impl AppState {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            service: DateConversionService::new(),
            display: Arc::new(display),
        }
    }

    pub fn renderer(&self) -> MonthCalendarRenderer {
        MonthCalendarRenderer::with_service(self.service)
    }
}
