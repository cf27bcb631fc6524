//! Axum integration for `rest-err`
//!
//! Handlers return [`ApiResult`]; the [`render_errors`] middleware then
//! renders every error according to an [`ErrorConfig`] and logs it.

#![allow(clippy::must_use_candidate)]

mod api_error;
mod middleware;
mod responder;

pub use api_error::{ApiError, ApiResult};
pub use middleware::render_errors;
pub use responder::ErrorResponder;
pub use rest_err_config::ErrorConfig;
