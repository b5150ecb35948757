// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::SelectorError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Data(String),
    Selector(SelectorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Data(e) => write!(f, "Data Error: {}", e),
            Error::Selector(e) => write!(f, "Selector Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SelectorError> for Error {
    fn from(err: SelectorError) -> Self {
        Error::Selector(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Data(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
