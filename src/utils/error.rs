use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error in {source_name}: {message}")]
    TomlError { source_name: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl SliderError {
    /// Short message suitable for stderr in the CLI.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SliderError::IoError(e) => format!("Could not read input file: {}", e),
            SliderError::SerializationError(e) => format!("Could not render report: {}", e),
            SliderError::TomlError { source_name, .. } => {
                format!("{} is not valid TOML", source_name)
            }
            SliderError::ConfigError { message } => message.clone(),
            SliderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SliderError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SliderError::IoError(_) => "Check that the file exists and is readable",
            SliderError::SerializationError(_) => "Retry without --json",
            SliderError::TomlError { .. } => "Check the file for syntax errors and unknown keys",
            SliderError::ConfigError { .. } | SliderError::InvalidConfigValueError { .. } => {
                "Fix the offending value or remove it to use the default"
            }
            SliderError::MissingConfigError { .. } => "Add the missing key to the file",
        }
    }
}

pub type Result<T> = std::result::Result<T, SliderError>;
