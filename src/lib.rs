//! tyname - type-name introspection and identifier codecs
//!
//! tyname lets on-chain module code reason about the runtime identity of
//! its types without a general-purpose string library:
//!
//! - split `PackageId::ModuleName::StructBody` type names into their parts
//! - recover the 20-byte package id from a type name
//! - compare two types for "declared by the same module"
//! - keep one active value per key in a per-entity attribute store
//!
//! # Quick Start
//!
//! ```
//! use tyname::{TypeName, slot, EntityId, InMemoryAttributeStore, Value};
//!
//! let coin: TypeName = "0000000000000000000000000000000000000002::coin::Coin<0000000000000000000000000000000000000002::sui::SUI>"
//!     .parse()
//!     .unwrap();
//! let cap: TypeName = "0000000000000000000000000000000000000002::coin::TreasuryCap<0000000000000000000000000000000000000002::sui::SUI>"
//!     .parse()
//!     .unwrap();
//! assert!(coin.is_same_module(&cap).unwrap());
//!
//! let store = InMemoryAttributeStore::new();
//! let owner = EntityId::new(coin.package_id().unwrap());
//! slot::set(&store, &owner, "kind", Value::TypeName(coin)).unwrap();
//! slot::set(&store, &owner, "kind", Value::U64(7)).unwrap();
//! assert_eq!(slot::get(&store, &owner, "kind"), Some(Value::U64(7)));
//! ```
//!
//! # Architecture
//!
//! The pure codecs live in `tyname-core`; attribute slots and their store
//! contract live in `tyname-storage`. Both are re-exported here.

pub use tyname_core::*;
pub use tyname_storage::*;
