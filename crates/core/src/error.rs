use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Connection, DNS, timeout or body-read failure. Never produced for a
    /// body that merely fails to decode as JSON.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
