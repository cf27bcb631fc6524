//! JSON wire representation

use jiff::Timestamp;
use serde::{Deserialize, Serialize, Serializer};

use crate::{Cause, ErrorKind, RestError};

/// Borrowed, serializable view of a [`RestError`]
///
/// The wrapped cause has no place here. Fields are public so a response
/// layer can drop causes or the timestamp before rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody<'a> {
    pub message: &'a str,
    pub error: &'static str,
    pub code: u16,
    #[serde(skip_serializing_if = "no_causes")]
    pub causes: &'a [Cause],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

fn no_causes(causes: &&[Cause]) -> bool {
    causes.is_empty()
}

/// Errors from reading a [`RestError`] back from its wire form
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// No kind owns this status code
    #[error("unsupported status code: {0}")]
    UnsupportedCode(u16),

    /// The `error` field disagrees with `code`
    #[error("error class `{found}` does not match status code {code} (expected `{expected}`)")]
    ClassMismatch {
        code: u16,
        expected: &'static str,
        found: String,
    },
}

/// Owned wire form used for deserialization
#[derive(Debug, Deserialize)]
pub(crate) struct WireError {
    message: String,
    error: String,
    code: u16,
    // Some producers emit `null` rather than omitting the field
    #[serde(default)]
    causes: Option<Vec<Cause>>,
    #[serde(default)]
    timestamp: Option<Timestamp>,
}

impl TryFrom<WireError> for RestError {
    type Error = BodyError;

    fn try_from(wire: WireError) -> Result<Self, Self::Error> {
        let kind = ErrorKind::from_code(wire.code).ok_or(BodyError::UnsupportedCode(wire.code))?;

        if wire.error != kind.as_str() {
            return Err(BodyError::ClassMismatch {
                code: wire.code,
                expected: kind.as_str(),
                found: wire.error,
            });
        }

        let mut err = Self::new(kind, wire.message, wire.causes.unwrap_or_default());
        if let Some(timestamp) = wire.timestamp {
            err.timestamp = timestamp;
        }

        Ok(err)
    }
}

impl RestError {
    /// Serializable view of this error
    pub fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            message: &self.message,
            error: self.error_class(),
            code: self.code(),
            causes: &self.causes,
            timestamp: Some(self.timestamp),
        }
    }
}

impl Serialize for RestError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body().serialize(serializer)
    }
}
