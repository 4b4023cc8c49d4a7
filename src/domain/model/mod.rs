//! Domain model definitions for the brewery resources.
//!
//! Each resource has a persisted entity (what the record store owns), a wire DTO
//! (what crosses HTTP) and a patch value (the normalised subset of a DTO that a
//! partial update applies).

use validator::ValidationError;

pub mod beer;
pub mod customer;

pub use beer::{Beer, BeerDto, BeerPatch, BeerQuery};
pub use customer::{Customer, CustomerDto, CustomerPatch, CustomerQuery};

/// True when the string has at least one non-whitespace character.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validator hook rejecting whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if has_text(value) {
        Ok(())
    } else {
        Err(ValidationError::new("not_blank"))
    }
}

/// Writes `value` into `slot` and reports whether the stored value changed.
pub(crate) fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
