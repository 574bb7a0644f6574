use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            id: String,
        }

        impl $name {
            /// Create a new id from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self { id: id.into() }
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.id
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.id)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                Self::new(s.clone())
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.id == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.id == *other
            }
        }
    };
}

string_id! {
    /// Identifies a question, and therefore its slot in the `Answers` map.
    ///
    /// Ids are flat snake_case strings such as `"country"` or `"notary_state"`.
    QuestionId
}

string_id! {
    /// Identifies a section (one wizard step).
    SectionId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        let id: QuestionId = "governing_state".into();
        assert_eq!(id.as_str(), "governing_state");
        assert_eq!(id, "governing_state");
    }

    #[test]
    fn display() {
        let id = SectionId::new("location_selection");
        assert_eq!(format!("{}", id), "location_selection");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SectionId::new("parties");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"parties\"");
    }
}
