//! Macros for defining typed entity ID types.

/// Macro to define a typed entity ID with its query-string key.
///
/// This generates a newtype wrapper around [`EntityId`](crate::EntityId)
/// with:
/// - A `QUERY_KEY` constant naming the parameter the ID travels under
/// - `new()` validating a raw integer
/// - `Display` and `FromStr` implementations (strict grammar)
/// - `Serialize` and `Deserialize` as a bare integer
/// - Conversions into [`EntityId`](crate::EntityId) and
///   [`Candidate`](crate::Candidate)
///
/// # Example
///
/// ```ignore
/// define_entity_id!(TermId, "term_id");
///
/// let term_id = TermId::new(5)?;
/// let parsed: TermId = "5".parse()?;
/// ```
#[macro_export]
macro_rules! define_entity_id {
    ($name:ident, $query_key:literal) => {
        /// A typed ID for this resource type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::EntityId);

        impl $name {
            /// The query-string parameter name for this ID type.
            pub const QUERY_KEY: &'static str = $query_key;

            /// Creates an ID from a raw integer, rejecting zero and
            /// negatives.
            pub fn new(id: i64) -> Result<Self, $crate::IdError> {
                $crate::EntityId::new(id).map(Self)
            }

            /// Creates an ID from an already-validated entity ID.
            #[must_use]
            pub const fn from_entity(id: $crate::EntityId) -> Self {
                Self(id)
            }

            /// Returns the validated entity ID.
            #[must_use]
            pub const fn entity(&self) -> $crate::EntityId {
                self.0
            }

            /// Returns the underlying integer value.
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0.get()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::EntityId::parse_str(s).map(Self)
            }
        }

        impl From<$name> for $crate::EntityId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.get()
            }
        }

        impl From<$name> for $crate::Candidate {
            fn from(id: $name) -> Self {
                $crate::Candidate::Int(id.get())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i64(self.get())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let id = i64::deserialize(deserializer)?;
                Self::new(id).map_err(serde::de::Error::custom)
            }
        }
    };
}
