//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Configuration problems are normally recovered locally (a segment simply gets no
//! content of the affected kind); the variants here cover the cases that must be
//! reported to the immediate caller.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown segment type '{id}'")]
    UnknownSegmentType { id: String },

    #[error("host operation failed: {0}")]
    Host(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "boom"));
    }

    #[test]
    fn unknown_type_names_the_type() {
        let err = Error::UnknownSegmentType {
            id: "hyperloop".into(),
        };
        assert_eq!(err.to_string(), "unknown segment type 'hyperloop'");
    }
}
