use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjError {
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),

    #[error("Transform failed: {0}")]
    TransformFailed(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Definition request for {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid definition for {code}: {reason}")]
    InvalidDefinition { code: String, reason: String },

    #[error("No definition registered for {0}")]
    MissingDefinition(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid projection in config: {0}")]
    Registry(#[from] RegistryError),
}
