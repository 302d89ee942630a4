//! Type name lookups through an injected source

use crate::common::*;
use tyname::{CodecConfig, Error, HexCase, TypeNameCodec, TypeNameSource, TypeRegistry};

struct Coin;
struct TreasuryCap;
struct Schema;

fn registry() -> TypeRegistry {
    let mut r = TypeRegistry::new();
    r.register::<Coin>(&coin_of_sui().to_string()).unwrap();
    r.register::<TreasuryCap>(&treasury_cap_of_sui().to_string()).unwrap();
    r.register::<Schema>(&schema().to_string()).unwrap();
    r
}

#[test]
fn typed_module_comparison() {
    init_tracing();
    let r = registry();
    assert!(r.is_same_module_of::<Coin, TreasuryCap>().unwrap());
    assert!(!r.is_same_module_of::<Coin, Schema>().unwrap());
}

#[test]
fn typed_package_id() {
    let r = registry();
    assert_eq!(r.package_id_of::<Schema>().unwrap().to_string(), SCHEMA_PKG);
    assert_eq!(r.package_id_of::<Coin>().unwrap(), r.package_id_of::<TreasuryCap>().unwrap());
}

#[test]
fn unknown_type_reports_rust_name() {
    let err = registry().type_name_of::<String>().unwrap_err();
    assert!(matches!(err, Error::TypeNotRegistered(ref name) if name.contains("String")));
}

#[test]
fn configured_codec_from_toml() {
    let config = CodecConfig::from_toml_str("hex_case = \"strict\"\nmax_type_name_bytes = 128\n")
        .unwrap();
    assert_eq!(config.hex_case, HexCase::Strict);

    let codec = TypeNameCodec::new(config);
    let parsed = codec.parse(&schema().to_string()).unwrap();
    assert_eq!(codec.package_id(&parsed).unwrap().to_string(), SCHEMA_PKG);

    let too_long = format!("{}::m::{}", SCHEMA_PKG, "S".repeat(200));
    assert!(matches!(
        codec.parse(&too_long),
        Err(Error::TypeNameTooLong { max: 128, .. })
    ));
}
