//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe wrappers around the opaque
//! string identifiers the backend assigns, preventing accidentally mixing
//! identifiers from different entity types.

/// Macro to define a type-safe identifier wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use corpdir_core::define_id;
/// define_id!(CustomerId);
/// define_id!(InvoiceId);
///
/// let customer_id = CustomerId::new("17");
/// let invoice_id = InvoiceId::new("17");
///
/// // These are different types, so this won't compile:
/// // let _: CustomerId = invoice_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl ::core::convert::Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(CompanyId);
define_id!(StorageKey);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = CompanyId::new("42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_display() {
        let id = CompanyId::new("company-7");
        assert_eq!(format!("{id}"), "company-7");
    }

    #[test]
    fn test_from_conversions() {
        let id: CompanyId = "abc".into();
        assert_eq!(id, CompanyId::new("abc"));

        let raw: String = id.into();
        assert_eq!(raw, "abc");
    }

    #[test]
    fn test_serde_transparent() {
        let key = StorageKey::new("logos/acme-1712.png");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"logos/acme-1712.png\"");

        let parsed: StorageKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }
}
