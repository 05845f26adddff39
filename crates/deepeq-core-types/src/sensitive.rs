//! Sensitive data marker for redacted failure output
//!
//! Values wrapped in `Sensitive<T>` take part in structural comparison like
//! the inner value, but every rendering of them (Debug, Display, and the
//! comparator's failure messages) shows [`REDACTED`] instead.

use std::fmt;

/// Placeholder printed wherever a sensitive value would otherwise appear.
pub const REDACTED: &str = "***REDACTED***";

/// Wrapper for data that must never show up in test output
///
/// # Example
///
/// ```
/// use deepeq_core_types::Sensitive;
///
/// let token = Sensitive::new("tok_live_123");
/// assert_eq!(format!("{:?}", token), "***REDACTED***");
/// assert_eq!(token.to_string(), "***REDACTED***");
///
/// // The comparator still sees the real value
/// assert_eq!(token.expose(), &"tok_live_123");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let secret = Sensitive::new("hunter2");
        let debug_str = format!("{:?}", secret);
        assert_eq!(debug_str, REDACTED);
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_sensitive_display_redaction() {
        let secret = Sensitive::new(1234_u32);
        assert_eq!(secret.to_string(), REDACTED);
    }

    #[test]
    fn test_sensitive_from_and_into_inner() {
        let secret: Sensitive<String> = String::from("pin").into();
        assert_eq!(secret.expose(), "pin");
        assert_eq!(secret.into_inner(), "pin");
    }

    #[test]
    fn test_sensitive_equality_uses_inner_value() {
        assert_eq!(Sensitive::new(7), Sensitive::new(7));
        assert_ne!(Sensitive::new(7), Sensitive::new(8));
    }

    #[test]
    fn test_sensitive_inside_debug_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Login {
            user: String,
            password: Sensitive<String>,
        }

        let login = Login {
            user: "alice".to_string(),
            password: Sensitive::new("secret123".to_string()),
        };

        let debug_str = format!("{:?}", login);
        assert!(debug_str.contains("alice"));
        assert!(debug_str.contains(REDACTED));
        assert!(!debug_str.contains("secret123"));
    }
}
