//! # Validation Module
//!
//! Input validation for the checked entry points of the store.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard forms (TypeScript)                                 │
//! │  └── Empty fields, immediate feedback                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checked store entry points                                   │
//! │  ├── place_order, add_staff, update_cafe_settings                      │
//! │  └── THIS MODULE: business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Raw store mutations (create_order, update_*)                 │
//! │  └── Accept anything, unknown ids are no-ops                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::validation::{validate_quantity, validate_time_of_day};
//!
//! validate_quantity(2).unwrap();
//! validate_time_of_day("shift_start", "09:30").unwrap();
//! assert!(validate_time_of_day("shift_start", "25:00").is_err());
//! ```

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::types::{CafeSettingsUpdate, NewStaff, OrderItem, TaxRate};
use crate::{MAX_ITEM_QUANTITY, MAX_ORDER_LINES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest accepted tax rate (28% GST slab).
pub const MAX_TAX_BPS: u32 = 2_800;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required, length-limited text field.
///
/// ```rust
/// use cafe_core::validation::validate_name;
///
/// assert!(validate_name("name", "Priya Sharma", 100).is_ok());
/// assert!(validate_name("name", "   ", 100).is_err());
/// ```
pub fn validate_name(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an email address loosely: something on both sides of one `@`.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_name("email", email, 254)?;

    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected name@domain".to_string(),
        }),
    }
}

/// Validates a 24-hour `HH:MM` time of day.
pub fn validate_time_of_day(field: &str, value: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected HH:MM".to_string(),
    };

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (complimentary items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate against the highest GST slab.
pub fn validate_tax_rate(rate: TaxRate) -> ValidationResult<()> {
    if rate.bps() > MAX_TAX_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_BPS as i64,
        });
    }

    Ok(())
}

/// Validates an exchange rate: finite and strictly positive.
pub fn validate_currency_rate(field: &str, rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates the lines of an order about to be placed.
///
/// ## Rules
/// - At least one line
/// - At most MAX_ORDER_LINES lines
/// - Every quantity valid, every price non-negative
pub fn validate_order_items(items: &[OrderItem]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::EmptyOrder);
    }

    if items.len() > MAX_ORDER_LINES {
        return Err(CoreError::OrderTooLarge {
            max: MAX_ORDER_LINES,
        });
    }

    for item in items {
        validate_quantity(item.quantity)?;
        validate_price(item.price)?;
    }

    Ok(())
}

/// Validates a new staff member.
pub fn validate_new_staff(staff: &NewStaff) -> ValidationResult<()> {
    validate_name("name", &staff.name, 100)?;
    validate_name("role", &staff.role, 50)?;
    validate_email(&staff.email)?;

    if let Some(start) = &staff.shift_start {
        validate_time_of_day("shift_start", start)?;
    }
    if let Some(end) = &staff.shift_end {
        validate_time_of_day("shift_end", end)?;
    }
    if let Some(salary) = staff.salary {
        validate_price(salary)?;
    }
    if !staff.hours_worked.is_finite() || staff.hours_worked < 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "hours_worked".to_string(),
        });
    }

    Ok(())
}

/// Validates the fields present in a settings update.
pub fn validate_settings_update(update: &CafeSettingsUpdate) -> ValidationResult<()> {
    if let Some(name) = &update.cafe_name {
        validate_name("cafe_name", name, 100)?;
    }
    if let Some(rate) = update.tax_rate {
        validate_tax_rate(rate)?;
    }
    if let Some(rate) = update.currency_rate_usd {
        validate_currency_rate("currency_rate_usd", rate)?;
    }
    if let Some(rate) = update.currency_rate_eur {
        validate_currency_rate("currency_rate_eur", rate)?;
    }
    if let Some(time) = &update.opening_time {
        validate_time_of_day("opening_time", time)?;
    }
    if let Some(time) = &update.closing_time {
        validate_time_of_day("closing_time", time)?;
    }

    Ok(())
}

/// Login only requires both credentials to be present.
pub fn credentials_present(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}

// =============================================================================
// Unit Tests
// =============================================================================
