//! Error types for the country picker.
//!
//! [`PickerError`] is the single error type used across the crate, with a
//! [`Result`] alias for convenience. Variants are derived with `thiserror`.

use thiserror::Error;

/// The main error type for country picker operations.
///
/// Most of the picker's core cannot fail: filter input is escaped before use
/// and missing data is treated as "nothing to do yet". Errors come from the
/// edges of the plugin: theme files and worker messaging.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Filesystem or I/O operation failed, e.g. reading a theme file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A worker message or response could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The background worker reported a failure.
    #[error("Worker error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for country picker operations.
///
/// # Examples
///
/// ```
/// use countrypicker::domain::Result;
///
/// fn noop() -> Result<()> {
///     Ok(())
/// }
/// # noop().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, PickerError>;
