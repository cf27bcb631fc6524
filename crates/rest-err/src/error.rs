use std::{error::Error, fmt, sync::Arc};

use http::StatusCode;
use jiff::Timestamp;

use crate::{Cause, ErrorKind, kind};

/// Underlying error attached to a [`RestError`]
///
/// Shared so that cloned errors point at the same cause.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Structured API error carrying an HTTP status
///
/// Created through one of the named constructors (e.g.
/// [`RestError::not_found`]) and read-only afterwards, apart from a single
/// [`with_cause`](RestError::with_cause) call right after construction.
/// The wrapped cause takes part in [`Error::source`] chains but is never
/// serialized.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(try_from = "crate::body::WireError")]
pub struct RestError {
    pub(crate) message: String,
    pub(crate) kind: ErrorKind,
    pub(crate) causes: Vec<Cause>,
    pub(crate) timestamp: Timestamp,
    pub(crate) source: Option<SharedError>,
}

impl RestError {
    /// Create an error of any kind
    ///
    /// Named constructors such as [`RestError::bad_request`] are usually
    /// more convenient.
    pub fn new(kind: ErrorKind, message: impl Into<String>, causes: impl IntoIterator<Item = Cause>) -> Self {
        Self {
            message: message.into(),
            kind,
            causes: causes.into_iter().collect(),
            timestamp: Timestamp::now(),
            source: None,
        }
    }

    /// Attach the underlying error that led to this one
    ///
    /// Meant to be called once, immediately after construction. A second
    /// call replaces the previous cause.
    #[must_use]
    pub fn with_cause(self, cause: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        self.with_shared_cause(Arc::from(cause.into()))
    }

    /// Attach an already shared underlying error
    #[must_use]
    pub fn with_shared_cause(mut self, cause: SharedError) -> Self {
        self.source = Some(cause);
        self
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error category
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Short error class, serialized as `error`
    pub const fn error_class(&self) -> &'static str {
        self.kind.as_str()
    }

    /// HTTP status code
    pub const fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    /// HTTP status code as a plain integer, serialized as `code`
    pub const fn code(&self) -> u16 {
        self.status_code().as_u16()
    }

    /// Field-level causes, empty unless built by a validation constructor
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    /// When the error was created
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// The wrapped underlying error, if any
    pub const fn wrapped(&self) -> Option<&SharedError> {
        self.source.as_ref()
    }

    pub const fn is_client_error(&self) -> bool {
        kind::is_client_error_code(self.code())
    }

    pub const fn is_server_error(&self) -> bool {
        kind::is_server_error_code(self.code())
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.kind, ErrorKind::Unauthorized)
    }

    pub const fn is_forbidden(&self) -> bool {
        matches!(self.kind, ErrorKind::Forbidden)
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl Error for RestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}
