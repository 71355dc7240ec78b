//! Sensitive data marker for automatic redaction
//!
//! Snippet bodies are caller-supplied text and must never reach a log line
//! or a `Debug` dump verbatim. `Sensitive<T>` wraps such values.

use std::fmt;

/// Wrapper that redacts its value in Debug and Display
///
/// # Example
///
/// ```
/// use snippets_core_types::Sensitive;
///
/// let body = Sensitive::new("export AWS_SECRET=...");
/// assert_eq!(format!("{:?}", body), "***REDACTED***");
/// assert_eq!(format!("{}", body), "***REDACTED***");
///
/// assert_eq!(body.expose(), &"export AWS_SECRET=...");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
