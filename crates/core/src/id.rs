//! Product identifiers.
//!
//! Identifiers are assigned by the Product Service and are opaque to the
//! client. Services in the wild hand out either integers or strings, so both
//! shapes are accepted and written back unchanged.

use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned product identifier.
///
/// Equality is textual: `ProductId::Numeric(7)` and `ProductId::Text("7")`
/// identify the same product, since both travel as `/api/products/7`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(i64),
    Text(String),
}

impl ProductId {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductId::Numeric(n) => core::fmt::Display::fmt(n, f),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProductId::Numeric(a), ProductId::Numeric(b)) => a == b,
            (ProductId::Text(a), ProductId::Text(b)) => a == b,
            (ProductId::Numeric(n), ProductId::Text(t))
            | (ProductId::Text(t), ProductId::Numeric(n)) => *t == n.to_string(),
        }
    }
}

impl Eq for ProductId {}

// Must agree with `PartialEq`, so hash the rendered form.
impl Hash for ProductId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        if s.contains('/') {
            return Err(DomainError::invalid_id(format!(
                "ProductId: '{}' contains a path separator",
                s
            )));
        }

        Ok(match s.parse::<i64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deserializes_integer_and_string_ids() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[1, "abc-42"]"#).unwrap();
        assert_eq!(ids[0], ProductId::Numeric(1));
        assert_eq!(ids[1], ProductId::text("abc-42"));
    }

    #[test]
    fn serializes_back_in_the_received_shape() {
        assert_eq!(serde_json::to_string(&ProductId::Numeric(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&ProductId::text("x")).unwrap(), "\"x\"");
    }

    #[test]
    fn numeric_and_textual_forms_of_same_id_are_equal() {
        assert_eq!(ProductId::Numeric(7), ProductId::text("7"));
        assert_ne!(ProductId::Numeric(7), ProductId::text("07"));

        let set: HashSet<ProductId> = [ProductId::Numeric(7), ProductId::text("7")].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn parses_from_user_input() {
        assert_eq!(" 12 ".parse::<ProductId>().unwrap(), ProductId::Numeric(12));
        assert_eq!(
            "65f0c2".parse::<ProductId>().unwrap(),
            ProductId::text("65f0c2")
        );
    }

    #[test]
    fn rejects_empty_and_path_like_input() {
        match "  ".parse::<ProductId>().unwrap_err() {
            DomainError::InvalidId(_) => {}
            other => panic!("Expected InvalidId, got {other:?}"),
        }
        assert!("1/2".parse::<ProductId>().is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a numeric id equals its own rendering parsed back.
            #[test]
            fn display_then_parse_is_identity(n in any::<i64>()) {
                let id = ProductId::Numeric(n);
                let parsed: ProductId = id.to_string().parse().unwrap();
                prop_assert_eq!(parsed, id);
            }
        }
    }
}
