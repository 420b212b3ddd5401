use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a data connection ("github", "jira", "filesystem", "code_index", ...).
///
/// The set of valid tags is owned by the backend and loaded at runtime,
/// so this is an open newtype rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionType(String);

impl ConnectionType {
    pub const CODE_INDEX: &'static str = "code_index";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Select label: first character upper-cased, rest untouched.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Only code indexes expose a re-index trigger.
    pub fn supports_reindex(&self) -> bool {
        self.0 == Self::CODE_INDEX
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConnectionType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
