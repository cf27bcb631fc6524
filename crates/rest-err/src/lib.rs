//! Structured, HTTP status aware errors for REST APIs
//!
//! A [`RestError`] carries a message, a status-derived error class, optional
//! field-level [`Cause`]s and a creation timestamp. It serializes to the JSON
//! body an API returns and still plugs into [`std::error::Error`] chains
//! through an optional wrapped cause.

#![allow(clippy::must_use_candidate)]

mod body;
mod cause;
mod chain;
mod constructors;
mod error;
mod http_error;
mod kind;
mod macros;
#[cfg(feature = "axum")]
mod response;

pub use body::{BodyError, ErrorBody};
pub use cause::Cause;
pub use chain::{DEFAULT_INTERNAL_MESSAGE, into_shared, parse};
pub use error::{RestError, SharedError};
pub use http_error::HttpError;
pub use kind::{ErrorKind, is_client_error_code, is_server_error_code};
