//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the RegDesk stack.
//! Each identifier is a distinct type — you cannot pass a [`RiskId`] where
//! a [`ComplaintId`] is expected.
//!
//! All three identifiers are UUID-based and always valid by construction.
//! Records arrive from upstream feeds with their identifiers already
//! assigned; `new()` exists for the API layer, which mints identifiers
//! when registering records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for an organization whose risk register and
/// complaints book are managed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(Uuid);

impl OrganizationId {
    /// Create a new random organization identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an organization identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrganizationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a risk register entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskId(Uuid);

impl RiskId {
    /// Create a new random risk identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a risk identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RiskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RiskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a complaint record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplaintId(Uuid);

impl ComplaintId {
    /// Create a new random complaint identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a complaint identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ComplaintId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_distinct_per_construction() {
        assert_ne!(RiskId::new(), RiskId::new());
        assert_ne!(ComplaintId::new(), ComplaintId::new());
        assert_ne!(OrganizationId::new(), OrganizationId::new());
    }

    #[test]
    fn from_uuid_roundtrip() {
        let raw = Uuid::new_v4();
        let id = RiskId::from_uuid(raw);
        assert_eq!(*id.as_uuid(), raw);
    }

    #[test]
    fn display_matches_uuid() {
        let raw = Uuid::new_v4();
        let id = ComplaintId::from_uuid(raw);
        assert_eq!(format!("{id}"), format!("{raw}"));
    }

    #[test]
    fn serde_roundtrip() {
        let id = OrganizationId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: OrganizationId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn serializes_as_plain_uuid_string() {
        let raw = Uuid::new_v4();
        let id = RiskId::from_uuid(raw);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{raw}\""));
    }
}
