//! End-to-end tests for the tyname facade.

#[path = "../common/mod.rs"]
mod common;

mod address_codec;
mod attribute_slots;
mod module_equivalence;
mod type_name_scenarios;
mod type_sources;
