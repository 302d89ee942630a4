//! Heterogeneous keyed store abstraction
//!
//! This is the contract of the external store that attribute slots sit on.
//! It is partial: `add` refuses an occupied slot and `remove`
//! refuses a slot whose stored kind differs from the one asked for. The
//! [`slot`](crate::slot) helpers build total operations on top of it.

use crate::value::{Value, ValueKind};
use crate::EntityId;
use tyname_core::Result;

/// Keyed attribute store, one namespace of field names per entity
///
/// Thread safety: implementations must be `Send + Sync`, but callers are
/// responsible for keeping at most one writer per entity at a time.
pub trait AttributeStore: Send + Sync {
    /// Whether `(entity, name)` holds a value
    fn exists(&self, entity: &EntityId, name: &str) -> bool;

    /// Kind of the value at `(entity, name)`, if any
    fn kind_of(&self, entity: &EntityId, name: &str) -> Option<ValueKind>;

    /// Copy of the value at `(entity, name)`, if any
    fn get(&self, entity: &EntityId, name: &str) -> Option<Value>;

    /// Insert a value into an empty slot
    ///
    /// # Errors
    ///
    /// Returns `FieldAlreadyExists` if the slot is occupied.
    fn add(&self, entity: &EntityId, name: &str, value: Value) -> Result<()>;

    /// Remove and return the value, which must be stored as `expected`
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if the slot is empty and `FieldTypeMismatch`
    /// if it holds a different kind; the slot is unchanged in both cases.
    fn remove(&self, entity: &EntityId, name: &str, expected: ValueKind) -> Result<Value>;
}
