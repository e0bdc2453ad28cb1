//! All error types for the stringsheet crate.
//!
//! These are returned from all fallible operations (transposition, parsing,
//! serialization, directory traversal).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed matrix: {0}")]
    MalformedMatrix(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("invalid language code `{0}`")]
    InvalidLanguage(String),

    #[error("`{}` already exists (enable overwrite to replace it)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("no language folders found in `{}`", .0.display())]
    NoLanguages(PathBuf),
}

impl Error {
    /// Creates a new malformed matrix error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedMatrix(message.into())
    }
}
