//! InMemoryAttributeStore: attribute store backed by a BTreeMap
//!
//! This module implements the AttributeStore trait using:
//! - `BTreeMap<FieldKey, Value>` ordered by entity, then field name
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **No history**: each slot stores only its current value
//! - **Strict contract**: `add` and `remove` fail exactly where the trait says
//!   they do, so slot helpers are exercised against the real partial store

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::trace;

use tyname_core::{Error, Result};

use crate::key::{EntityId, FieldKey};
use crate::store::AttributeStore;
use crate::value::{Value, ValueKind};

/// Attribute store held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryAttributeStore {
    data: RwLock<BTreeMap<FieldKey, Value>>,
}

impl InMemoryAttributeStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of occupied slots
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Field names of `entity`, in ascending order
    pub fn fields_of(&self, entity: &EntityId) -> Vec<String> {
        let data = self.data.read();
        data.range(FieldKey::entity_start(*entity)..)
            .take_while(|(k, _)| k.entity == *entity)
            .map(|(k, _)| k.name.clone())
            .collect()
    }

    fn key(entity: &EntityId, name: &str) -> FieldKey {
        FieldKey::new(*entity, name)
    }
}

impl AttributeStore for InMemoryAttributeStore {
    fn exists(&self, entity: &EntityId, name: &str) -> bool {
        self.data.read().contains_key(&Self::key(entity, name))
    }

    fn kind_of(&self, entity: &EntityId, name: &str) -> Option<ValueKind> {
        self.data.read().get(&Self::key(entity, name)).map(Value::kind)
    }

    fn get(&self, entity: &EntityId, name: &str) -> Option<Value> {
        self.data.read().get(&Self::key(entity, name)).cloned()
    }

    fn add(&self, entity: &EntityId, name: &str, value: Value) -> Result<()> {
        let mut data = self.data.write();
        match data.entry(Self::key(entity, name)) {
            Entry::Occupied(e) => Err(Error::FieldAlreadyExists(e.key().to_string())),
            Entry::Vacant(e) => {
                trace!(key = %e.key(), kind = %value.kind(), "add attribute");
                e.insert(value);
                Ok(())
            }
        }
    }

    fn remove(&self, entity: &EntityId, name: &str, expected: ValueKind) -> Result<Value> {
        let mut data = self.data.write();
        match data.entry(Self::key(entity, name)) {
            Entry::Vacant(e) => Err(Error::FieldNotFound(e.key().to_string())),
            Entry::Occupied(e) => {
                let actual = e.get().kind();
                if actual != expected {
                    return Err(Error::FieldTypeMismatch {
                        key: e.key().to_string(),
                        expected: expected.to_string(),
                        actual: actual.to_string(),
                    });
                }
                trace!(key = %e.key(), kind = %actual, "remove attribute");
                Ok(e.remove())
            }
        }
    }
}
