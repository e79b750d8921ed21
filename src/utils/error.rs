use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Postlist operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Postlist operations
#[derive(Debug)]
pub enum PostlistError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Feed generation error
    Feed(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for PostlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostlistError::Io(err) => write!(f, "IO error: {}", err),
            PostlistError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PostlistError::Feed(msg) => write!(f, "Feed error: {}", msg),
            PostlistError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PostlistError {}

impl From<io::Error> for PostlistError {
    fn from(err: io::Error) -> Self {
        PostlistError::Io(err)
    }
}

impl From<String> for PostlistError {
    fn from(msg: String) -> Self {
        PostlistError::Generic(msg)
    }
}

impl From<&str> for PostlistError {
    fn from(msg: &str) -> Self {
        PostlistError::Generic(msg.to_string())
    }
}
