//! HTTP front end built on [axum](https://docs.rs/axum).
//!
//! - `GET /` serves the conversion form as a complete server-rendered page.
//!   It works with zero JavaScript: the form submits back to `/` via GET.
//! - `GET /api/convert` and `GET /api/month` expose the same operations as
//!   JSON.
//! - `GET /health` answers `OK`.
//!
//! Handlers only parse requests and shape responses; conversion lives in
//! [`crate::service`] and [`crate::month_view`].

pub mod api;
pub mod error;
pub mod page;
pub mod router;
pub mod state;
