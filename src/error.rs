use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClubhouseError {
    #[error("API token not found. Set CLUBHOUSE_API_TOKEN or run 'clubhouse auth' to configure.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ClubhouseResult<T> = Result<T, ClubhouseError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ClubhouseResult<T>;
    fn with_context<F>(self, f: F) -> ClubhouseResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ClubhouseResult<T> {
        self.map_err(|e| ClubhouseError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ClubhouseResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClubhouseError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ClubhouseResult<T> {
        self.ok_or_else(|| ClubhouseError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ClubhouseResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ClubhouseError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! clubhouse_error {
    ($error_type:ident, $msg:expr) => {
        ClubhouseError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        ClubhouseError::$error_type(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_on_result() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let wrapped = result.context("Failed to read config file");
        match wrapped {
            Err(ClubhouseError::Unknown(msg)) => {
                assert!(msg.contains("Failed to read config file"));
                assert!(msg.contains("file not found"));
            }
            _ => panic!("Expected ClubhouseError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_on_option() {
        let option: Option<String> = None;
        let result = option.context("API token not found");

        match result {
            Err(ClubhouseError::Unknown(msg)) => {
                assert_eq!(msg, "API token not found");
            }
            _ => panic!("Expected ClubhouseError::Unknown"),
        }
    }

    #[test]
    fn test_clubhouse_error_macro() {
        let error = clubhouse_error!(TransportError, "HTTP error: 500");
        match error {
            ClubhouseError::TransportError(msg) => assert_eq!(msg, "HTTP error: 500"),
            _ => panic!("Expected ClubhouseError::TransportError"),
        }

        let error = clubhouse_error!(ValidationError, "missing field: {}", "name");
        match error {
            ClubhouseError::ValidationError(msg) => assert_eq!(msg, "missing field: name"),
            _ => panic!("Expected ClubhouseError::ValidationError"),
        }
    }
}
