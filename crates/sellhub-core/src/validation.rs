//! # Validation Module
//!
//! Validation of raw request fields before any store access.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: axum JSON extraction                                         │
//! │  └── Body must be a JSON object (else "Invalid input")                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── productId: present, canonical UUID                                │
//! │  └── quantity: JSON number with no fractional part                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database                                                     │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (inventory_count >= 0)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields arrive as `serde_json::Value` so that a wrong JSON type (a string
//! quantity, a numeric id) is reported as a validation failure of that field
//! instead of a generic body rejection.

use serde_json::Value;

use crate::error::ValidationError;
use crate::{MAX_INVENTORY_COUNT, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field name of the product identifier in request bodies.
pub const PRODUCT_ID_FIELD: &str = "productId";

/// Field name of the adjustment amount in request bodies.
pub const QUANTITY_FIELD: &str = "quantity";

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

fn invalid_format(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Checks that `id` is a UUID in canonical hyphenated form (any version).
///
/// ## Example
/// ```rust
/// use sellhub_core::validation::is_uuid;
///
/// assert!(is_uuid("aa322176-6c45-4b07-8df3-00359366d2b4"));
/// assert!(!is_uuid("123"));
/// assert!(!is_uuid("aa3221766c454b078df300359366d2b4"));
/// ```
pub fn is_uuid(id: &str) -> bool {
    id.len() == 36 && uuid::Uuid::try_parse(id).is_ok()
}

/// Validates the `productId` of a signed-delta update.
///
/// ## Rules
/// - Must be present and a non-empty string
/// - Must be a hyphenated UUID
pub fn validate_product_id(value: Option<&Value>) -> ValidationResult<String> {
    match value {
        None | Some(Value::Null) => Err(required(PRODUCT_ID_FIELD)),
        Some(Value::String(s)) if s.is_empty() => Err(required(PRODUCT_ID_FIELD)),
        Some(Value::String(s)) if is_uuid(s) => Ok(s.clone()),
        Some(Value::String(_)) => Err(invalid_format(PRODUCT_ID_FIELD, "must be a valid UUID")),
        Some(_) => Err(invalid_format(PRODUCT_ID_FIELD, "must be a string")),
    }
}

/// Validates the `productId` of a legacy update.
///
/// ## Rules
/// - Must be truthy: not missing, null, `false`, `0` or `""`
/// - Strings are taken as-is, numbers are rendered to their decimal form
/// - No UUID format check
pub fn validate_legacy_product_id(value: Option<&Value>) -> ValidationResult<String> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(required(PRODUCT_ID_FIELD)),
        Some(Value::String(s)) if s.is_empty() => Err(required(PRODUCT_ID_FIELD)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(required(PRODUCT_ID_FIELD)),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(invalid_format(PRODUCT_ID_FIELD, "must be a string")),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Converts a JSON number to an integral `i64` within ±`MAX_INVENTORY_COUNT`.
///
/// `5.0` is accepted as 5; `5.5` is not an integer.
fn integral_number(field: &str, value: &Value) -> ValidationResult<i64> {
    let n = match value {
        Value::Number(n) => n,
        _ => return Err(invalid_format(field, "must be a number")),
    };

    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: -MAX_INVENTORY_COUNT,
        max: MAX_INVENTORY_COUNT,
    };

    let int = if let Some(i) = n.as_i64() {
        i
    } else if n.is_u64() {
        return Err(out_of_range());
    } else {
        let f = n.as_f64().unwrap_or(f64::NAN);
        if !f.is_finite() || f.fract() != 0.0 {
            return Err(ValidationError::NotAnInteger {
                field: field.to_string(),
            });
        }
        if f.abs() > MAX_INVENTORY_COUNT as f64 {
            return Err(out_of_range());
        }
        f as i64
    };

    if !(-MAX_INVENTORY_COUNT..=MAX_INVENTORY_COUNT).contains(&int) {
        return Err(out_of_range());
    }

    Ok(int)
}

/// Validates the signed `quantity` of an update.
///
/// ## Rules
/// - Must be a JSON number (strings such as `"5"` are rejected)
/// - Must be integral
/// - Zero and negative values are allowed
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use sellhub_core::validation::validate_quantity;
///
/// assert_eq!(validate_quantity(Some(&json!(-5))).unwrap(), -5);
/// assert!(validate_quantity(Some(&json!(5.5))).is_err());
/// assert!(validate_quantity(Some(&json!("invalid"))).is_err());
/// ```
pub fn validate_quantity(value: Option<&Value>) -> ValidationResult<i64> {
    match value {
        None | Some(Value::Null) => Err(required(QUANTITY_FIELD)),
        Some(v) => integral_number(QUANTITY_FIELD, v),
    }
}

/// Validates the `quantity` of a legacy update.
///
/// Any JSON number is accepted by the legacy contract; values with a
/// fractional part are still refused because stock is counted in whole units.
pub fn validate_legacy_quantity(value: Option<&Value>) -> ValidationResult<i64> {
    validate_quantity(value)
}

/// Validates a restock amount: an integral quantity greater than zero.
pub fn validate_restock_quantity(value: Option<&Value>) -> ValidationResult<i64> {
    let quantity = validate_quantity(value)?;

    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: QUANTITY_FIELD.to_string(),
        });
    }

    Ok(quantity)
}

/// Validates a stored inventory count (0..=MAX_INVENTORY_COUNT).
pub fn validate_inventory_count(count: i64) -> ValidationResult<()> {
    if !(0..=MAX_INVENTORY_COUNT).contains(&count) {
        return Err(ValidationError::OutOfRange {
            field: "inventoryCount".to_string(),
            min: 0,
            max: MAX_INVENTORY_COUNT,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 255 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(required("name"));
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: &str = "aa322176-6c45-4b07-8df3-00359366d2b4";

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id(Some(&json!(ID))).unwrap(), ID);

        assert!(matches!(
            validate_product_id(None),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_product_id(Some(&json!(null))).is_err());
        assert!(validate_product_id(Some(&json!(""))).is_err());
        assert!(validate_product_id(Some(&json!("123"))).is_err());
        assert!(validate_product_id(Some(&json!(123))).is_err());
        // simple and braced forms are not canonical
        assert!(validate_product_id(Some(&json!("aa3221766c454b078df300359366d2b4"))).is_err());
        assert!(validate_product_id(Some(&json!(format!("{{{ID}}}")))).is_err());
    }

    #[test]
    fn test_validate_legacy_product_id() {
        assert_eq!(validate_legacy_product_id(Some(&json!("123"))).unwrap(), "123");
        assert_eq!(validate_legacy_product_id(Some(&json!(42))).unwrap(), "42");

        assert!(validate_legacy_product_id(None).is_err());
        assert!(validate_legacy_product_id(Some(&json!(""))).is_err());
        assert!(validate_legacy_product_id(Some(&json!(0))).is_err());
        assert!(validate_legacy_product_id(Some(&json!(false))).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(Some(&json!(5))).unwrap(), 5);
        assert_eq!(validate_quantity(Some(&json!(-5))).unwrap(), -5);
        assert_eq!(validate_quantity(Some(&json!(0))).unwrap(), 0);
        assert_eq!(validate_quantity(Some(&json!(5.0))).unwrap(), 5);

        assert!(matches!(
            validate_quantity(Some(&json!(5.5))),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(validate_quantity(Some(&json!("invalid"))).is_err());
        assert!(validate_quantity(Some(&json!("5"))).is_err());
        assert!(validate_quantity(Some(&json!(true))).is_err());
        assert!(validate_quantity(None).is_err());
        assert!(matches!(
            validate_quantity(Some(&json!(u64::MAX))),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_quantity(Some(&json!(MAX_INVENTORY_COUNT + 1))).is_err());
    }

    #[test]
    fn test_validate_restock_quantity() {
        assert_eq!(validate_restock_quantity(Some(&json!(3))).unwrap(), 3);
        assert!(matches!(
            validate_restock_quantity(Some(&json!(0))),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_restock_quantity(Some(&json!(-1))).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Product 1").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(255)).is_ok());
        assert!(validate_product_name(&"A".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_inventory_count() {
        assert!(validate_inventory_count(0).is_ok());
        assert!(validate_inventory_count(MAX_INVENTORY_COUNT).is_ok());
        assert!(validate_inventory_count(-1).is_err());
    }
}
