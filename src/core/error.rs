use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(String),
}

pub type Result<T> = std::result::Result<T, PagerError>;

impl From<regex::Error> for PagerError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_error_maps_to_invalid_pattern() {
        let err: PagerError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, PagerError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("Invalid filter pattern"));
    }

    #[test]
    fn test_json_error_display() {
        let err: PagerError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
