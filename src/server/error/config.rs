use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// Check the documentation or `.env.example` file for the accepted formats.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
