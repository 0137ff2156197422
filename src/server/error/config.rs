use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into the expected type.
    ///
    /// # Fields
    /// - Name of the variable
    /// - The value that failed to parse
    #[error("Invalid value for environment variable {0}: '{1}'")]
    InvalidEnvVar(String, String),

    /// The places file could not be read or is not a JSON array of places.
    ///
    /// # Fields
    /// - Path of the file
    /// - Underlying error message
    #[error("Invalid places file {0}: {1}")]
    InvalidPlacesFile(String, String),
}
