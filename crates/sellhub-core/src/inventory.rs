//! # Inventory Arithmetic
//!
//! The only decision logic in the service: computing a new stock level
//! under the non-negative invariant.
//!
//! ## Adjustment Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  new_count = current + delta                                            │
//! │                                                                         │
//! │  new_count < 0                   → InsufficientInventory (no write)     │
//! │  new_count > MAX_INVENTORY_COUNT → InventoryOverflow     (no write)     │
//! │  otherwise                       → new_count                            │
//! │                                                                         │
//! │  delta > 0  restock                                                     │
//! │  delta < 0  consumption                                                 │
//! │  delta = 0  no-op, still succeeds                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores evaluate the same rule inside their atomic update; these functions
//! are used to classify a refused update and by the in-memory store.

use crate::error::{CoreError, CoreResult};
use crate::MAX_INVENTORY_COUNT;

/// Applies a signed `delta` to `current`.
///
/// ## Example
/// ```rust
/// use sellhub_core::inventory::apply_delta;
///
/// assert_eq!(apply_delta("p1", 10, -5).unwrap(), 5);
/// assert!(apply_delta("p3", 2, -5).is_err());
/// ```
pub fn apply_delta(product_id: &str, current: i64, delta: i64) -> CoreResult<i64> {
    let overflow = || CoreError::InventoryOverflow {
        product_id: product_id.to_string(),
        max: MAX_INVENTORY_COUNT,
    };

    let new_count = current.checked_add(delta).ok_or_else(overflow)?;

    if new_count < 0 {
        return Err(CoreError::InsufficientInventory {
            product_id: product_id.to_string(),
            available: current,
            requested: delta.unsigned_abs().min(i64::MAX as u64) as i64,
        });
    }

    if new_count > MAX_INVENTORY_COUNT {
        return Err(overflow());
    }

    Ok(new_count)
}

/// Takes `quantity` units out of stock (legacy subtract-only rule).
///
/// Refused when `current < quantity`. A negative `quantity` is not rejected
/// here and therefore adds stock, as the legacy endpoint always did.
pub fn consume(product_id: &str, current: i64, quantity: i64) -> CoreResult<i64> {
    let delta = quantity.checked_neg().ok_or_else(|| CoreError::InventoryOverflow {
        product_id: product_id.to_string(),
        max: MAX_INVENTORY_COUNT,
    })?;

    apply_delta(product_id, current, delta)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_restock_and_consume_scenarios() {
        // P1 at 5, +5 → 10, then -5 → 5
        assert_eq!(apply_delta("p1", 5, 5).unwrap(), 10);
        assert_eq!(apply_delta("p1", 10, -5).unwrap(), 5);

        // P3 at 2, -5 → refused
        let err = apply_delta("p3", 2, -5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientInventory {
                available: 2,
                requested: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_delta_and_exact_drain() {
        assert_eq!(apply_delta("p", 0, 0).unwrap(), 0);
        assert_eq!(apply_delta("p", 7, -7).unwrap(), 0);
    }

    #[test]
    fn test_overflow_is_refused() {
        assert!(matches!(
            apply_delta("p", MAX_INVENTORY_COUNT, 1),
            Err(CoreError::InventoryOverflow { .. })
        ));
        assert!(matches!(
            apply_delta("p", i64::MAX, 1),
            Err(CoreError::InventoryOverflow { .. })
        ));
    }

    #[test]
    fn test_consume_matches_legacy_guard() {
        assert_eq!(consume("p", 10, 3).unwrap(), 7);
        assert!(consume("p", 2, 5).is_err());
        // legacy endpoint never rejected a negative amount
        assert_eq!(consume("p", 2, -3).unwrap(), 5);
        assert!(consume("p", 0, i64::MIN).is_err());
    }

    proptest! {
        #[test]
        fn prop_non_negative_result_is_exact(current in 0..=MAX_INVENTORY_COUNT, delta in -MAX_INVENTORY_COUNT..=MAX_INVENTORY_COUNT) {
            let expected = current + delta;
            match apply_delta("p", current, delta) {
                Ok(n) => {
                    prop_assert_eq!(n, expected);
                    prop_assert!(n >= 0);
                }
                Err(CoreError::InsufficientInventory { available, .. }) => {
                    prop_assert!(expected < 0);
                    prop_assert_eq!(available, current);
                }
                Err(CoreError::InventoryOverflow { .. }) => {
                    prop_assert!(expected > MAX_INVENTORY_COUNT);
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }

        #[test]
        fn prop_consume_is_negated_delta(current in 0..=MAX_INVENTORY_COUNT, quantity in 0..=MAX_INVENTORY_COUNT) {
            let consumed = consume("p", current, quantity).ok();
            let adjusted = apply_delta("p", current, -quantity).ok();
            prop_assert_eq!(consumed, adjusted);
            prop_assert_eq!(consumed.is_some(), current >= quantity);
        }
    }
}
