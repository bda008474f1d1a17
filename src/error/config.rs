use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A built-in schedule constant could not be parsed.
    #[error("Invalid value for {name} '{value}': {reason}")]
    InvalidValue {
        /// Name of the setting
        name: &'static str,
        /// The raw value that failed to parse
        value: String,
        /// Parser error message
        reason: String,
    },
}
