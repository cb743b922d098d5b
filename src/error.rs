//! Errors raised while turning a results page into records.
//!
//! Only two things are fatal: asking for a header language that has no
//! translation table, and a numeric cell that does not hold a number.
//! A line that matches no grammar is never an error, parsers return `None`
//! for that.

use thiserror::Error;

/// Result type alias for the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Can't read the results page: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_number<E>(field: &'static str, value: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidNumber {
            field,
            value: value.to_owned(),
            source: Box::new(source),
        }
    }
}
