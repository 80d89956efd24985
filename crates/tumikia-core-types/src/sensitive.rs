//! Sensitive data marker for automatic redaction
//!
//! Caregiver phone numbers, national ids and birth-certificate numbers are
//! personal data. The `Sensitive<T>` wrapper ensures such values are never
//! accidentally written to a log line or a debug dump.

use std::fmt;

/// Wrapper for personal data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use tumikia_core_types::Sensitive;
///
/// let phone = Sensitive::new("0712345678");
/// println!("{:?}", phone); // Prints: ***REDACTED***
/// println!("{}", phone);   // Prints: ***REDACTED***
///
/// // Access the actual value when needed
/// assert_eq!(phone.expose(), &"0712345678");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Use this method sparingly and only where the datum must actually be
    /// shown (e.g. rendering a caregiver detail view the operator asked for).
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
