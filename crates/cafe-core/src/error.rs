//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CoreError        - Checked entry point failures                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cafe-store errors (separate crate)                                    │
//! │  └── StoreError       - Snapshot storage failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Dashboard            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Plain store mutations never return these: an update against an unknown
//! id is a silent no-op. Errors only come out of the checked entry points
//! (`place_order`, `add_staff`, settings updates) and of storage.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order was submitted without line items.
    #[error("Order must contain at least one item")]
    EmptyOrder,

    /// Order cannot be found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Menu item cannot be found.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(u32),

    /// Menu item exists but is switched off.
    #[error("Menu item {name} is not available")]
    MenuItemUnavailable { name: String },

    /// Order has more distinct lines than allowed.
    #[error("Order cannot have more than {max} items")]
    OrderTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., shift time that is not HH:MM).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MenuItemUnavailable {
            name: "Masala Chai".to_string(),
        };
        assert_eq!(err.to_string(), "Menu item Masala Chai is not available");
        assert_eq!(
            CoreError::EmptyOrder.to_string(),
            "Order must contain at least one item"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::InvalidFormat {
            field: "shift_start".to_string(),
            reason: "expected HH:MM".to_string(),
        };
        assert_eq!(err.to_string(), "shift_start has invalid format: expected HH:MM");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
