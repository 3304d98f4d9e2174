//! Newtype wrapper for placement identifiers.
//!
//! Gives compile-time separation between placement IDs and the other
//! strings flowing through the engine (titles, entry text, etc.).

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Identifier of a single positioned content unit.
///
/// IDs are assigned by the section builders ("experience-2",
/// "skill-heading", ...) and are stable across re-renders of the same
/// document.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlacementId(Arc<str>);

impl PlacementId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlacementId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for PlacementId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for PlacementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for PlacementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
