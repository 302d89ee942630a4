//! Attribute storage for tyname
//!
//! This crate implements per-entity attribute slots with:
//! - Value / ValueKind: variant-tagged values held in a slot
//! - EntityId / FieldKey: slot addressing (entity → field name)
//! - AttributeStore: contract of the external heterogeneous keyed store
//! - InMemoryAttributeStore: BTreeMap-based store with RwLock
//! - slot: set/drop helpers enforcing one active value per key

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod in_memory;
pub mod key;
pub mod slot;
pub mod store;
pub mod value;

pub use in_memory::InMemoryAttributeStore;
pub use key::{EntityId, FieldKey};
pub use store::AttributeStore;
pub use value::{Value, ValueKind};
