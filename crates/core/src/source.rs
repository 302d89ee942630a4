//! Type name sources
//!
//! The codec never asks how a type name was obtained. Callers inject a
//! [`TypeNameSource`] that maps a compile-time type to its canonical
//! `PackageId::ModuleName::StructBody` string; the provided methods then
//! answer the usual questions about that type.
//!
//! ## Usage
//!
//! ```
//! use tyname_core::{TypeNameSource, TypeRegistry};
//!
//! struct Coin;
//! struct TreasuryCap;
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register::<Coin>("0000000000000000000000000000000000000002::coin::Coin")
//!     .unwrap();
//! registry
//!     .register::<TreasuryCap>("0000000000000000000000000000000000000002::coin::TreasuryCap")
//!     .unwrap();
//!
//! assert!(registry.is_same_module_of::<Coin, TreasuryCap>().unwrap());
//! ```

use crate::address::BinaryId;
use crate::ascii::AsciiText;
use crate::error::{Error, Result};
use crate::type_name::{is_same_module, ModuleAddress, TypeName};
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use tracing::debug;

/// Host capability yielding the canonical type name of a static type
pub trait TypeNameSource {
    /// Canonical name of `T`
    ///
    /// # Errors
    ///
    /// Implementations fail when they have no name for `T`.
    fn type_name_of<T: ?Sized + 'static>(&self) -> Result<TypeName>;

    /// Package id declaring `T`
    fn package_id_of<T: ?Sized + 'static>(&self) -> Result<BinaryId> {
        self.type_name_of::<T>()?.package_id()
    }

    /// Module declaring `T`
    fn module_address_of<T: ?Sized + 'static>(&self) -> Result<ModuleAddress> {
        self.type_name_of::<T>()?.module_address()
    }

    /// Struct body of `T`, generic arguments included
    fn struct_name_of<T: ?Sized + 'static>(&self) -> Result<AsciiText> {
        self.type_name_of::<T>()?.struct_name()
    }

    /// Whether `A` and `B` are declared by the same module
    fn is_same_module_of<A: ?Sized + 'static, B: ?Sized + 'static>(&self) -> Result<bool> {
        is_same_module(&self.type_name_of::<A>()?, &self.type_name_of::<B>()?)
    }
}

/// Type name source populated explicitly at start-up
///
/// Maps Rust `TypeId`s to canonical names. Intended to be filled once by
/// generated or hand-written registration code, then shared read-only.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    names: HashMap<TypeId, TypeName>,
}

impl TypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the canonical name of `T`
    ///
    /// Registering `T` again replaces the earlier name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAsciiCharacter` if `name` is not ASCII.
    pub fn register<T: ?Sized + 'static>(&mut self, name: &str) -> Result<()> {
        let name: TypeName = name.parse()?;
        if let Some(previous) = self.names.insert(TypeId::of::<T>(), name) {
            debug!(
                rust_type = type_name::<T>(),
                previous = %previous,
                "replaced registered type name"
            );
        }
        Ok(())
    }

    /// Whether `T` has a registered name
    pub fn is_registered<T: ?Sized + 'static>(&self) -> bool {
        self.names.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TypeNameSource for TypeRegistry {
    fn type_name_of<T: ?Sized + 'static>(&self) -> Result<TypeName> {
        self.names
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or_else(|| Error::TypeNotRegistered(type_name::<T>().to_string()))
    }
}
