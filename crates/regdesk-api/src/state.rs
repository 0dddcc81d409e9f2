//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! Persistence is out of scope for this service — the store is in-memory
//! only, and the upstream platform database remains the system of record.
//! The store exists so aggregation endpoints have a register to compute
//! over; it is hydrated through the registration endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use regdesk_complaints::ComplaintRecord;
use regdesk_risk::RiskRecord;

// -- Generic In-Memory Store --------------------------------------------------

/// Thread-safe, cloneable in-memory key-value store.
///
/// All operations are synchronous (the RwLock is `parking_lot`, not
/// `tokio::sync`) because the lock is never held across `.await` points.
/// `parking_lot::RwLock` is non-poisonable — a panicking writer does not
/// permanently corrupt the store.
#[derive(Debug)]
pub struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, returning the previous value if the key existed.
    pub fn insert(&self, id: Uuid, value: T) -> Option<T> {
        self.data.write().insert(id, value)
    }

    /// Retrieve a record by ID.
    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.data.read().get(id).cloned()
    }

    /// List all records.
    pub fn list(&self) -> Vec<T> {
        self.data.read().values().cloned().collect()
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

// -- Stored Record Types ------------------------------------------------------

/// A risk record scoped to the organization that registered it.
#[derive(Debug, Clone)]
pub struct RiskEntry {
    /// The owning organization.
    pub organization_id: Uuid,
    /// The register entry itself.
    pub record: RiskRecord,
}

// -- AppState -----------------------------------------------------------------

/// Application configuration, built from the environment in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state: configuration plus the in-memory registers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<AppConfig>,
    /// Risk register entries, keyed by risk ID.
    pub risks: Store<RiskEntry>,
    /// Complaint records, keyed by complaint ID.
    pub complaints: Store<ComplaintRecord>,
}

impl AppState {
    /// Create state with default configuration and empty registers.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create state with explicit configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            risks: Store::new(),
            complaints: Store::new(),
        }
    }

    /// Risk records registered for one organization.
    pub fn risks_for_organization(&self, organization_id: &Uuid) -> Vec<RiskRecord> {
        self.risks
            .list()
            .into_iter()
            .filter(|entry| entry.organization_id == *organization_id)
            .map(|entry| entry.record)
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_insert_get_roundtrip() {
        let store: Store<String> = Store::new();
        let id = Uuid::new_v4();
        assert!(store.insert(id, "a".to_string()).is_none());
        assert_eq!(store.get(&id).as_deref(), Some("a"));
        assert_eq!(store.insert(id, "b".to_string()).as_deref(), Some("a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_clones_share_data() {
        let store: Store<u32> = Store::new();
        let clone = store.clone();
        let id = Uuid::new_v4();
        store.insert(id, 7);
        assert_eq!(clone.get(&id), Some(7));
    }

    #[test]
    fn risks_are_scoped_by_organization() {
        let state = AppState::new();
        let org_a = Uuid::new_v4();
        let org_b = Uuid::new_v4();
        let record: RiskRecord =
            serde_json::from_str(r#"{"likelihood":3,"impact":3}"#).unwrap();

        state.risks.insert(
            Uuid::new_v4(),
            RiskEntry {
                organization_id: org_a,
                record: record.clone(),
            },
        );
        state.risks.insert(
            Uuid::new_v4(),
            RiskEntry {
                organization_id: org_a,
                record: record.clone(),
            },
        );
        state.risks.insert(
            Uuid::new_v4(),
            RiskEntry {
                organization_id: org_b,
                record,
            },
        );

        assert_eq!(state.risks_for_organization(&org_a).len(), 2);
        assert_eq!(state.risks_for_organization(&org_b).len(), 1);
        assert_eq!(state.risks_for_organization(&Uuid::new_v4()).len(), 0);
    }
}
