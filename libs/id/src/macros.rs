//! Macros for defining typed ID types.

/// Maximum length of an ID in bytes.
pub const MAX_ID_LEN: usize = 64;

/// Checks an ID string against the shared format rules.
#[doc(hidden)]
pub fn validate(s: &str) -> Result<(), crate::IdError> {
    if s.is_empty() {
        return Err(crate::IdError::Empty);
    }

    if s.len() > MAX_ID_LEN {
        return Err(crate::IdError::TooLong {
            len: s.len(),
            max: MAX_ID_LEN,
        });
    }

    if let Some(found) = s
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(crate::IdError::InvalidCharacter {
            id: s.to_string(),
            found,
        });
    }

    Ok(())
}

/// Macro to define a typed ID with a specific prefix.
///
/// This generates a newtype wrapper around a validated string with:
/// - A `PREFIX` constant used by `generate()`
/// - `parse()` to validate and wrap a string
/// - `generate()` to mint a fresh `{prefix}_{ulid}` ID
/// - `Display`, `FromStr`, `Borrow<str>` and `AsRef<str>` implementations
/// - `Serialize` and `Deserialize` implementations (validated on input)
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_id!(WorkerId, "wkr");
///
/// let minted = WorkerId::generate();
/// let parsed: WorkerId = "w1".parse()?;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A typed ID for this resource type.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The prefix for generated IDs of this type.
            pub const PREFIX: &'static str = $prefix;

            /// Parses an ID from a string.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::validate_id(s)?;
                Ok(Self(s.to_string()))
            }

            /// Creates a new ID with a fresh ULID.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}_{}", Self::PREFIX, $crate::Ulid::new()))
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::IdError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
