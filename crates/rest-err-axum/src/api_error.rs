use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use rest_err::{RestError, SharedError};

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned from handlers
///
/// Either a [`RestError`] or an unstructured error that still has to be
/// normalized. Foreign errors that wrap a [`RestError`] are unwrapped on
/// conversion.
#[derive(Debug)]
pub struct ApiError(Inner);

#[derive(Debug)]
enum Inner {
    Rest(RestError),
    Foreign(SharedError),
}

/// Unstructured error stashed in response extensions for [`crate::render_errors`]
#[derive(Debug, Clone)]
pub(crate) struct ForeignError(pub(crate) SharedError);

impl ApiError {
    /// Wrap any error
    pub fn foreign(err: impl Into<anyhow::Error>) -> Self {
        Self::from(err.into())
    }

    /// The structured error, if this is one
    pub const fn as_rest(&self) -> Option<&RestError> {
        match &self.0 {
            Inner::Rest(rest) => Some(rest),
            Inner::Foreign(_) => None,
        }
    }
}

impl From<RestError> for ApiError {
    fn from(err: RestError) -> Self {
        Self(Inner::Rest(err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(rest) = RestError::find_in_anyhow(&err) {
            return Self(Inner::Rest(rest.clone()));
        }

        Self(Inner::Foreign(rest_err::into_shared(err)))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Inner::Rest(err) => err.into_response(),
            Inner::Foreign(err) => {
                // Rendered with the default message until the middleware
                // applies the configured one
                let mut response = RestError::from_error(Arc::clone(&err)).into_response();
                response.extensions_mut().insert(ForeignError(err));
                response
            }
        }
    }
}
