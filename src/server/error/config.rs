use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed into the expected type.
    ///
    /// Unset variables fall back to their defaults, so this only fires for values
    /// that were explicitly provided. Check `.env` for typos.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },
}
