//! HTTP surface for the Savonarola content-moderation demo gateway.
//!
//! One endpoint, `GET /api/demo/test?case=<n>`, forwards a fixed prompt
//! scenario to the configured chat deployment and translates the provider's
//! outcome into the HTTP contract:
//!
//! - `200` — the completion text, verbatim
//! - `400` — a content-filter verdict or the raw provider error message
//! - `500` — a syntactically valid selector with no scenario mapping
//!
//! Each call is independent: the only shared state is the long-lived
//! [`ChatCompletions`](savonarola_client::ChatCompletions) handle, and the
//! single suspension point is the outbound provider call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod observability;

pub use api::{ApiState, create_router, serve};
pub use observability::init_tracing;
pub use savonarola_error::{ServerError, ServerErrorKind};
