#[cfg(feature = "cli")]
pub mod cli;
pub mod scenario;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::{Result, SliderError};
use regex::Regex;
use serde::de::DeserializeOwned;

/// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
pub(crate) fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SliderError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str, source_name: &str) -> Result<T> {
    let processed = substitute_env_vars(content)?;
    toml::from_str(&processed).map_err(|e| SliderError::TomlError {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}
