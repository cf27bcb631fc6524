use std::sync::Arc;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use rest_err::{HttpError, RestError};
use rest_err_config::ErrorConfig;

/// Renders errors into responses according to an [`ErrorConfig`]
#[derive(Debug, Clone, Default)]
pub struct ErrorResponder {
    config: Arc<ErrorConfig>,
}

impl ErrorResponder {
    pub fn new(config: ErrorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ErrorConfig {
        &self.config
    }

    /// Convert any error into a [`RestError`], using the configured
    /// fallback message for unstructured ones
    pub fn normalize(&self, err: impl Into<anyhow::Error>) -> RestError {
        RestError::from_error_with_message(err, self.config.fallback_message.as_str())
    }

    /// Normalize, log and render any error
    pub fn respond(&self, err: impl Into<anyhow::Error>) -> Response {
        self.render(&self.normalize(err))
    }

    /// Log and render a structured error
    pub fn render(&self, err: &RestError) -> Response {
        self.log(err);

        let mut body = err.body();
        if !self.config.include_causes {
            body.causes = &[];
        }
        if !self.config.include_timestamp {
            body.timestamp = None;
        }

        (HttpError::status_code(err), Json(body)).into_response()
    }

    /// Server errors at `error` with their cause, client errors at `debug`
    /// when enabled
    fn log(&self, err: &dyn HttpError) {
        let status = err.status_code();
        let cause = std::error::Error::source(err).map(ToString::to_string);

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                error_class = err.error_class(),
                cause = cause.as_deref(),
                "{}",
                err.client_message()
            );
        } else if self.config.log_client_errors {
            tracing::debug!(
                status = status.as_u16(),
                error_class = err.error_class(),
                "{}",
                err.client_message()
            );
        }
    }
}
