use serde::{Deserialize, Serialize};

/// Field-level detail explaining why a request was rejected
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cause {
    /// Field or parameter that caused the error (e.g. `email`)
    pub field: String,
    /// Description of the problem with that field
    pub message: String,
}

impl Cause {
    /// Create a cause for a single field
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl<F: Into<String>, M: Into<String>> From<(F, M)> for Cause {
    fn from((field, message): (F, M)) -> Self {
        Self::new(field, message)
    }
}
