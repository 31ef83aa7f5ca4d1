use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares a transparent string identifier.
///
/// Identifiers in this system are caller-chosen strings ("123", "C1", ...),
/// so each entity gets its own newtype to keep them from being mixed up.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Unique identifier for a customer.
    CustomerId
}

string_id! {
    /// Unique identifier for a product.
    ProductId
}

string_id! {
    /// Unique identifier for an order.
    OrderId
}

string_id! {
    /// Identifier of a line item within an order.
    OrderItemId
}

impl OrderId {
    /// Generates a new random order ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl OrderItemId {
    /// Generates a new random order item ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_order_ids_are_unique() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn blank_ids_are_detected() {
        assert!(CustomerId::new("").is_blank());
        assert!(CustomerId::new("   ").is_blank());
        assert!(!CustomerId::new("C1").is_blank());
    }

    #[test]
    fn conversions_preserve_value() {
        let id: ProductId = "P1".into();
        assert_eq!(id.as_str(), "P1");
        assert_eq!(id.to_string(), "P1");
        assert_eq!(String::from(id), "P1");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = CustomerId::new("123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123\"");
        let back: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
