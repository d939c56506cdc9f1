//! Strongly-typed identifiers used across the catalog domain.

use core::fmt;
use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Ids are free-form strings: seeded records carry fixed slugs
/// (`odf-rack-24`), records created through the admin flow get a generated
/// `product-<millis>` id. Matching is always exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// An id that has not been assigned yet; `add` generates one on append.
    pub fn unassigned() -> Self {
        Self(String::new())
    }

    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Millisecond-clock source for generated product ids.
///
/// Two calls inside the same millisecond must still yield distinct ids, so
/// the generator remembers the last value it issued and bumps past it
/// whenever the clock has not advanced.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: Mutex<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> ProductId {
        let now = Utc::now().timestamp_millis();
        let mut last = match self.last_millis.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let millis = if now > *last { now } else { *last + 1 };
        *last = millis;
        ProductId(format!("product-{millis}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_product_prefix() {
        let ids = IdGenerator::new();
        assert!(ids.next().as_str().starts_with("product-"));
    }

    #[test]
    fn consecutive_generations_are_distinct() {
        let ids = IdGenerator::new();
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn unassigned_id_is_empty() {
        let id = ProductId::unassigned();
        assert!(id.is_unassigned());
        assert_eq!(id.as_str(), "");
        assert!(!ProductId::from("odf-rack-24").is_unassigned());
    }
}
