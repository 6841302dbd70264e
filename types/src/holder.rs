//! Holder identity type.
//!
//! Identities are opaque strings to the core — the balance oracle is the
//! only component that interprets them. The empty string is the null
//! identity and is never a valid recipient.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque stakeholder / recipient identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolderAddress(String);

impl HolderAddress {
    /// The null identity — never a valid proposal recipient.
    pub const NULL: &'static str = "";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the null identity.
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HolderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for HolderAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for HolderAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
