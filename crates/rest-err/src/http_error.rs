use http::StatusCode;

use crate::RestError;

/// What a response layer needs to know about an error
///
/// `rest-err-axum` renders and logs through this trait, so other status
/// bearing errors can share the same logging policy.
pub trait HttpError: std::error::Error {
    fn status_code(&self) -> StatusCode;

    /// Short class paired with the status (e.g. `not found`)
    fn error_class(&self) -> &str;

    /// Message that may be shown to clients, never including wrapped causes
    fn client_message(&self) -> String;
}

impl HttpError for RestError {
    fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn error_class(&self) -> &str {
        self.kind.as_str()
    }

    fn client_message(&self) -> String {
        // Display would append the wrapped cause
        self.message.clone()
    }
}
