use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Failure to expand a `{{ ... }}` placeholder
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// Referenced variable is unset and has no default
    #[error("environment variable not found: `{0}`")]
    MissingVar(String),

    /// Placeholder does not use the `env.` scope
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML
///
/// Comment lines are left untouched.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let lines = input
        .split('\n')
        .map(|line| {
            if line.trim_start().starts_with('#') {
                Ok(line.to_owned())
            } else {
                expand_line(line)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    let mut failure = None;

    let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
        resolve(caps).unwrap_or_else(|e| {
            failure.get_or_insert(e);
            String::new()
        })
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded.into_owned()),
    }
}

fn resolve(caps: &Captures<'_>) -> Result<String, ExpandError> {
    let key = &caps[1];

    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned()));
    };

    std::env::var(var_name)
        .ok()
        .or_else(|| caps.get(2).map(|default| default.as_str().to_owned()))
        .ok_or_else(|| ExpandError::MissingVar(var_name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders() {
        let input = "include_causes = true\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_variable() {
        temp_env::with_var("REST_ERR_MSG", Some("oops"), || {
            let result = expand_env("fallback_message = \"{{ env.REST_ERR_MSG }}\"").unwrap();
            assert_eq!(result, "fallback_message = \"oops\"");
        });
    }

    #[test]
    fn missing_variable() {
        temp_env::with_var_unset("REST_ERR_MISSING", || {
            let err = expand_env("a = \"{{ env.REST_ERR_MISSING }}\"").unwrap_err();
            assert_eq!(err, ExpandError::MissingVar("REST_ERR_MISSING".to_owned()));
        });
    }

    #[test]
    fn default_applies_when_unset() {
        temp_env::with_var_unset("REST_ERR_MISSING", || {
            let result = expand_env("a = \"{{ env.REST_ERR_MISSING | default(\"fallback\") }}\"").unwrap();
            assert_eq!(result, "a = \"fallback\"");
        });
    }

    #[test]
    fn variable_beats_default() {
        temp_env::with_var("REST_ERR_SET", Some("actual"), || {
            let result = expand_env("a = \"{{ env.REST_ERR_SET | default(\"fallback\") }}\"").unwrap();
            assert_eq!(result, "a = \"actual\"");
        });
    }

    #[test]
    fn unsupported_scope() {
        let err = expand_env("a = \"{{ secrets.TOKEN }}\"").unwrap_err();
        assert_eq!(err, ExpandError::UnsupportedScope("secrets.TOKEN".to_owned()));
    }

    #[test]
    fn comments_are_not_expanded() {
        temp_env::with_var_unset("REST_ERR_MISSING", || {
            let input = "  # a = \"{{ env.REST_ERR_MISSING }}\"\nb = 1";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
