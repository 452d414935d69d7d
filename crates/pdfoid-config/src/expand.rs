//! Environment variable expansion for configuration strings.
//!
//! Supports two forms:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses the default

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a configuration value.
///
/// `field` is the config field path (e.g. `renderer.url`) used in error
/// messages.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if a `${VAR}` reference without a default
/// names an unset variable, or if a reference is not terminated by `}`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(value.len());
    let mut remaining = value;

    while let Some(start) = remaining.find("${") {
        result.push_str(&remaining[..start]);
        let after = &remaining[start + 2..];

        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("unterminated reference in '{value}'"),
            });
        };

        let reference = &after[..end];
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        match std::env::var(name) {
            Ok(val) => result.push_str(&val),
            Err(_) => {
                if let Some(default) = default {
                    result.push_str(default);
                } else {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            }
        }

        remaining = &after[end + 1..];
    }

    result.push_str(remaining);
    Ok(result)
}
