//! Configuration for how rest-err errors are rendered at the API boundary

#![allow(clippy::must_use_candidate)]

mod env;
mod loader;

use serde::Deserialize;

pub use env::ExpandError;

/// How errors are rendered at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorConfig {
    /// Message for foreign errors normalized into a 500
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    /// Render field-level causes in response bodies
    #[serde(default = "default_true")]
    pub include_causes: bool,
    /// Render the creation timestamp in response bodies
    #[serde(default = "default_true")]
    pub include_timestamp: bool,
    /// Log 4xx responses at debug level (5xx are always logged)
    #[serde(default)]
    pub log_client_errors: bool,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            fallback_message: default_fallback_message(),
            include_causes: true,
            include_timestamp: true,
            log_client_errors: false,
        }
    }
}

fn default_fallback_message() -> String {
    rest_err::DEFAULT_INTERNAL_MESSAGE.to_owned()
}

#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: ErrorConfig = toml::from_str("").unwrap();
        assert_eq!(config, ErrorConfig::default());
        assert_eq!(config.fallback_message, "internal server error");
    }

    #[test]
    fn deserialize_all_fields() {
        let toml = r#"
            fallback_message = "something went wrong"
            include_causes = false
            include_timestamp = false
            log_client_errors = true
        "#;

        let config: ErrorConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.fallback_message, "something went wrong");
        assert!(!config.include_causes);
        assert!(!config.include_timestamp);
        assert!(config.log_client_errors);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = toml::from_str::<ErrorConfig>("include_stack = true");
        assert!(result.is_err());
    }
}
