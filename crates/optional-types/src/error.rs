//! Error types for optional

use thiserror::Error;

use crate::contract::{Expected, Parameter};

/// Boxed error produced by a caller-supplied error factory.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by `Optional` operations
#[derive(Debug, Error)]
pub enum OptionalError {
    /// An argument did not satisfy its contract
    #[error("invalid argument type for parameter \"{parameter}\"; expected: \"{expected}\"")]
    InvalidArgument {
        /// Offending parameter
        parameter: Parameter,
        /// What the parameter must be
        expected: Expected,
    },

    /// A callable ran but its result violated the return contract
    #[error("invalid return type for method \"{method}\"; expected: \"{expected}\"")]
    InvalidReturnType {
        /// Callable whose result was rejected
        method: Parameter,
        /// What the callable must return
        expected: Expected,
    },

    /// Extraction from an empty container
    #[error("value not present")]
    ValuePresence,

    /// Error produced by an `or_else_get_throw` supplier, passed through unchanged
    #[error("{0}")]
    Supplied(BoxError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl OptionalError {
    /// Build an `InvalidArgument` error.
    pub fn invalid_argument(parameter: Parameter, expected: Expected) -> Self {
        OptionalError::InvalidArgument {
            parameter,
            expected,
        }
    }

    /// Build an `InvalidReturnType` error.
    pub fn invalid_return_type(method: Parameter, expected: Expected) -> Self {
        OptionalError::InvalidReturnType { method, expected }
    }

    /// Whether this error reports a broken argument or return contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            OptionalError::InvalidArgument { .. } | OptionalError::InvalidReturnType { .. }
        )
    }

    /// The supplier-produced error, if this is one.
    pub fn supplied(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            OptionalError::Supplied(err) => Some(&**err),
            _ => None,
        }
    }

    /// Take ownership of the supplier-produced error.
    pub fn into_supplied(self) -> std::result::Result<BoxError, Self> {
        match self {
            OptionalError::Supplied(err) => Ok(err),
            other => Err(other),
        }
    }

    /// Log the error with a level matching its kind
    pub fn log(&self) {
        match self {
            OptionalError::Config(_) => {
                tracing::warn!(error = %self, "optional configuration failed");
            }
            OptionalError::Supplied(_) => {
                tracing::trace!(error = %self, "propagating supplied error");
            }
            _ => {
                tracing::debug!(error = %self, "optional contract violated");
            }
        }
    }
}

/// Configuration error details
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),
}

/// Result type for optional operations
pub type Result<T> = std::result::Result<T, OptionalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = OptionalError::invalid_argument(Parameter::Value, Expected::NonNullish);
        assert_eq!(
            err.to_string(),
            "invalid argument type for parameter \"value\"; expected: \"non-nullish\""
        );
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_invalid_return_type_message() {
        let err = OptionalError::invalid_return_type(Parameter::Mapper, Expected::Optional);
        assert_eq!(
            err.to_string(),
            "invalid return type for method \"mapper\"; expected: \"Optional\""
        );

        let err = OptionalError::invalid_return_type(Parameter::ErrorSupplier, Expected::Error);
        assert_eq!(
            err.to_string(),
            "invalid return type for method \"errorSupplier\"; expected: \"Error\""
        );
    }

    #[test]
    fn test_value_presence_message() {
        let err = OptionalError::ValuePresence;
        assert_eq!(err.to_string(), "value not present");
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_supplied_roundtrip() {
        let source: BoxError = "custom failure".into();
        let err = OptionalError::Supplied(source);
        assert_eq!(err.to_string(), "custom failure");
        assert_eq!(err.supplied().map(|e| e.to_string()).as_deref(), Some("custom failure"));

        let inner = err.into_supplied().unwrap();
        assert_eq!(inner.to_string(), "custom failure");

        let not_supplied = OptionalError::ValuePresence.into_supplied();
        assert!(matches!(not_supplied, Err(OptionalError::ValuePresence)));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: OptionalError = ConfigError::FileNotFound("optional.toml".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration file not found: optional.toml"
        );
    }
}
