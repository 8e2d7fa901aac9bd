//! Common error handling utilities and conventions

use crate::form::FieldErrors;

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core error types shared by the client and the frontend
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid route table: {message}")]
    InvalidRoutes { message: String },

    #[error("Form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Submission rejected: {message}")]
    Submission { message: String },
}

impl CoreError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid routes error
    pub fn invalid_routes(message: impl Into<String>) -> Self {
        Self::InvalidRoutes {
            message: message.into(),
        }
    }

    /// Create a submission error
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }
}

/// Extension trait for adding context to errors consistently across crates
pub trait ErrorContext<T> {
    /// Add operation context to an error result
    fn with_context<F>(self, f: F) -> Result<T, String>
    where
        F: FnOnce() -> String;

    /// Add operation context with a static string
    fn with_context_str(self, context: &'static str) -> Result<T, String>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> Result<T, String>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| format!("{}: {}", f(), err))
    }

    fn with_context_str(self, context: &'static str) -> Result<T, String> {
        self.with_context(|| context.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_counts_fields() {
        let mut errors = FieldErrors::default();
        errors.insert("email", "Email is required");
        errors.insert("password", "Password is required");
        assert_eq!(
            CoreError::Validation(errors).to_string(),
            "Form has 2 invalid field(s)"
        );
    }

    #[test]
    fn test_with_context_prefixes_message() {
        let result: Result<(), &str> = Err("boom");
        assert_eq!(
            result.with_context_str("loading settings").unwrap_err(),
            "loading settings: boom"
        );
    }
}
