//! Error types for finch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_errors_convert_and_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err: Error = source.into();
        assert!(err.to_string().starts_with("Regex error:"));
    }
}
