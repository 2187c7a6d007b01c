//! Identifiers
//!
//! Line items, partial payments and stored records are keyed by UUIDv7 values,
//! which sort by creation time. Each kind of record gets its own newtype so that
//! a payment id can never be handed to a line operation.

pub use uuid::Uuid;

/// Declares a time-ordered identifier newtype backed by a UUIDv7.
#[macro_export]
macro_rules! time_ordered_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name($crate::ids::Uuid);

        impl $name {
            /// Generates a fresh identifier ordered by the current time.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::ids::Uuid::now_v7())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::ids::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_uuid(self) -> $crate::ids::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::ids::Uuid> for $name {
            fn from(value: $crate::ids::Uuid) -> Self {
                Self::from_uuid(value)
            }
        }

        impl From<$name> for $crate::ids::Uuid {
            fn from(value: $name) -> Self {
                value.into_uuid()
            }
        }
    };
}

time_ordered_id! {
    /// Order line identifier
    pub struct LineId;
}

time_ordered_id! {
    /// Partial payment identifier
    pub struct PaymentId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique_and_time_ordered() {
        let first = LineId::new();
        let second = LineId::new();

        assert_ne!(first, second);
        assert!(first < second, "later ids should sort after earlier ones");
    }

    #[test]
    fn round_trips_through_uuid() {
        let uuid = Uuid::now_v7();
        let id = PaymentId::from(uuid);

        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
