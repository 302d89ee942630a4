//! Single-active-value attribute slots
//!
//! A slot `(entity, name)` holds at most one value, of whatever kind was
//! set last. The underlying [`AttributeStore`] cannot overwrite, and cannot
//! remove without naming the stored kind, so [`set`] looks up the stored
//! kind, removes under it, then adds the new value. Changing a slot from
//! one kind to another is therefore always accepted.
//!
//! No locking happens here. Callers must hold the only writer for the
//! entity for the duration of each call.

use tracing::{debug, trace};
use tyname_core::Result;

use crate::key::EntityId;
use crate::store::AttributeStore;
use crate::value::Value;

/// Store `value` at `(entity, name)`, replacing whatever was there
///
/// Returns the replaced value, if any. After `set` the slot holds exactly
/// `value`.
///
/// # Errors
///
/// Only propagates errors from a store that breaks its own contract.
pub fn set<S>(store: &S, entity: &EntityId, name: &str, value: Value) -> Result<Option<Value>>
where
    S: AttributeStore + ?Sized,
{
    let previous = match store.kind_of(entity, name) {
        Some(kind) => {
            debug!(
                %entity,
                name,
                previous = %kind,
                new = %value.kind(),
                "replacing attribute"
            );
            Some(store.remove(entity, name, kind)?)
        }
        None => {
            trace!(%entity, name, new = %value.kind(), "setting attribute");
            None
        }
    };
    store.add(entity, name, value)?;
    Ok(previous)
}

/// Remove the value at `(entity, name)` if present
///
/// Returns the removed value; an empty slot is a no-op returning `None`.
///
/// # Errors
///
/// Only propagates errors from a store that breaks its own contract.
pub fn drop<S>(store: &S, entity: &EntityId, name: &str) -> Result<Option<Value>>
where
    S: AttributeStore + ?Sized,
{
    match store.kind_of(entity, name) {
        Some(kind) => {
            trace!(%entity, name, kind = %kind, "dropping attribute");
            store.remove(entity, name, kind).map(Some)
        }
        None => Ok(None),
    }
}

/// Current value at `(entity, name)`
pub fn get<S>(store: &S, entity: &EntityId, name: &str) -> Option<Value>
where
    S: AttributeStore + ?Sized,
{
    store.get(entity, name)
}
