//! Error types.
//!
//! Failure inside the library is a value (`Nothing` or `Left`), so the only
//! error type is the one carried out of a caught panic by
//! [`encase_panic`](crate::control::encase_panic) and
//! [`encase_either_panic`](crate::control::encase_either_panic).

use std::any::Any;

/// A panic raised by an encased function, reduced to its message.
///
/// # Examples
///
/// ```rust
/// use tacit::error::PanicError;
///
/// let error = PanicError::new("Cannot determine factorial of negative number");
/// assert_eq!(
///     format!("{error}"),
///     "Cannot determine factorial of negative number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicError {
    /// The panic message, or a placeholder if the payload was not a string.
    pub message: String,
}

impl PanicError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a `catch_unwind` payload.
    ///
    /// `panic!` with a literal produces a `&'static str` payload and with a
    /// format string a `String` payload; anything else keeps a placeholder.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with a non-string payload".to_string());
        Self { message }
    }
}

impl std::fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for PanicError {}
