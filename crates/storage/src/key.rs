//! Keys for attribute slots
//!
//! - EntityId: identity of the entity that owns a set of attributes
//! - FieldKey: composite key (entity + field name) addressing one slot

use serde::{Deserialize, Serialize};
use std::fmt;
use tyname_core::BinaryId;

/// Identity of an entity owning attributes
///
/// Wraps the same 20-byte identifier used for package and object
/// addresses, so object ids from the host can be used directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(BinaryId);

impl EntityId {
    /// Create an EntityId from a binary identifier
    pub fn new(id: BinaryId) -> Self {
        Self(id)
    }

    /// Underlying binary identifier
    pub fn as_binary_id(&self) -> &BinaryId {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BinaryId> for EntityId {
    fn from(id: BinaryId) -> Self {
        Self(id)
    }
}

/// Address of one attribute slot
///
/// # Ordering
///
/// Keys are ordered by: entity → name
///
/// All slots of an entity are therefore contiguous in an ordered map, which
/// lets stores list an entity's fields with a range scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldKey {
    /// Owning entity
    pub entity: EntityId,
    /// Field name, unique per entity
    pub name: String,
}

impl FieldKey {
    /// Create a new field key
    pub fn new(entity: EntityId, name: impl Into<String>) -> Self {
        Self {
            entity,
            name: name.into(),
        }
    }

    /// Lowest key of `entity`, the start of its range in an ordered map
    pub fn entity_start(entity: EntityId) -> Self {
        Self {
            entity,
            name: String::new(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entity, self.name)
    }
}
