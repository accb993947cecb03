use anyhow::Result;
use regex::Regex;
use std::env;
use tracing::{debug, warn};

/// Substitute environment variables written as ${VAR_NAME}.
///
/// Placeholders for unset variables are left in place; the validator
/// reports them as errors before the server starts.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern is valid");

    let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
        let var_name = &caps[1];
        match env::var(var_name) {
            Ok(value) => {
                debug!("Substituting environment variable: {}", var_name);
                value
            }
            Err(_) => {
                warn!("Environment variable '{}' not set", var_name);
                caps[0].to_string()
            }
        }
    });

    Ok(result.into_owned())
}

/// Check if a string still contains unresolved ${VAR_NAME} placeholders.
pub fn has_unresolved_env_vars(content: &str) -> bool {
    let re = Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern is valid");
    re.is_match(content)
}
