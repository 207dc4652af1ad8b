//! Record identifiers
//!
//! Identifiers are opaque strings issued by storage. Numeric identifiers
//! are accepted on decode and kept in their decimal form.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create identifier from any string-like value
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow as string slice
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = crate::de::IdValue::deserialize(deserializer)?.into_string();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(serde::de::Error::custom(concat!(
                        "empty identifier for ",
                        stringify!($name)
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

string_id!(
    /// Project scoping every row set
    ProjectId
);

string_id!(
    /// Phase identifier (`phase_id`)
    PhaseId
);

string_id!(
    /// Milestone identifier (`jalon_id`)
    MilestoneId
);

string_id!(
    /// Task identifier (`tache_id`)
    TaskId
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_trims_and_accepts_numbers() {
        let id: PhaseId = serde_json::from_value(json!("  P1 ")).unwrap();
        assert_eq!(id.as_str(), "P1");

        let id: TaskId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn decode_rejects_empty() {
        let err = serde_json::from_value::<MilestoneId>(json!("   ")).unwrap_err();
        assert!(err.to_string().contains("MilestoneId"));
    }

    #[test]
    fn encodes_as_plain_string() {
        let value = serde_json::to_value(ProjectId::new("proj-7")).unwrap();
        assert_eq!(value, json!("proj-7"));
    }
}
