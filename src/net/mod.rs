//! Network layer: HTTP client, uniform error type, wire records, and the
//! per-endpoint API helpers.
//!
//! DESIGN
//! ======
//! Every helper returns `Result<T, ApiError>` so page views pattern-match on
//! one tagged error type instead of inspecting nested optional response
//! fields. The client attaches the bearer credential on every request; the
//! decision to treat a failure as session expiry stays with each caller.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
