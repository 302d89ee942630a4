//! Shared test utilities for the integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::sync::Once;

use tyname::{AsciiText, BinaryId, EntityId, TypeName};

/// Package id of the framework package, as hex
pub const FRAMEWORK: &str = "0000000000000000000000000000000000000002";

/// A non-framework package id, as hex
pub const SCHEMA_PKG: &str = "21a31ea6f1924898b78f06f0d929f3b91a2748c0";

static INIT_TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Parse a type name, panicking on malformed test input.
pub fn type_name(s: &str) -> TypeName {
    s.parse().expect("test type name must be ASCII")
}

/// Parse ASCII text, panicking on malformed test input.
pub fn text(s: &str) -> AsciiText {
    AsciiText::try_from(s).expect("test text must be ASCII")
}

/// `0x2::coin::Coin<0x2::sui::SUI>` in canonical form.
pub fn coin_of_sui() -> TypeName {
    type_name(&format!("{FRAMEWORK}::coin::Coin<{FRAMEWORK}::sui::SUI>"))
}

/// `0x2::coin::TreasuryCap<0x2::sui::SUI>` in canonical form.
pub fn treasury_cap_of_sui() -> TypeName {
    type_name(&format!("{FRAMEWORK}::coin::TreasuryCap<{FRAMEWORK}::sui::SUI>"))
}

/// `0x2::sui::SUI` in canonical form.
pub fn sui() -> TypeName {
    type_name(&format!("{FRAMEWORK}::sui::SUI"))
}

/// `<schema pkg>::schema::Schema` in canonical form.
pub fn schema() -> TypeName {
    type_name(&format!("{SCHEMA_PKG}::schema::Schema"))
}

/// Entity id with every byte set to `fill`.
pub fn entity(fill: u8) -> EntityId {
    EntityId::new(BinaryId::from_bytes([fill; 20]))
}
