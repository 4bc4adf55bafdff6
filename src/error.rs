//! Global error handling for codedump
//!
//! Fatal conditions (output creation, traversal) surface as `DumpError`.
//! Per-file read failures never do; the aggregator absorbs them.

use std::io;
use thiserror::Error;

/// Global error type for codedump operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory traversal errors
    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Output writer errors, with what was being attempted
    #[error("Writer error: {context}: {source}")]
    Writer {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// Specialized Result type for codedump operations
pub type Result<T> = std::result::Result<T, DumpError>;

/// Creates a DumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to IO errors
pub trait ResultExt<T> {
    /// Wrap the error as a writer error, keeping it as the source
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T> ResultExt<T> for io::Result<T> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|source| DumpError::Writer {
            context: f().to_string(),
            source,
        })
    }
}

// main returns io::Result; IO kinds survive the conversion
impl From<DumpError> for io::Error {
    fn from(err: DumpError) -> Self {
        match err {
            DumpError::Io(e) => e,
            DumpError::Writer { context, source } => io::Error::new(
                source.kind(),
                format!("Writer error: {}: {}", context, source),
            ),
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
