//! Type name decomposition scenarios

use crate::common::*;
use tyname::{
    append_struct_name, decompose_module_address, decompose_type_name, derive_package_id,
    AsciiText, BinaryId, Error, ModuleAddress,
};

#[test]
fn coin_of_sui_splits_at_first_two_separators() {
    let (module, body) = decompose_type_name(&coin_of_sui()).unwrap();

    assert_eq!(module.to_string(), format!("{FRAMEWORK}::coin"));
    assert_eq!(body.to_string(), format!("Coin<{FRAMEWORK}::sui::SUI>"));
}

#[test]
fn name_without_separators_is_rejected() {
    let err = decompose_type_name(&type_name("1234567890")).unwrap_err();
    assert!(matches!(err, Error::InvalidTypeNameFormat(_)));
}

#[test]
fn schema_package_index_lookup() {
    let haystack = text(&format!("0x{SCHEMA_PKG}::schema::Schema"));
    assert_eq!(haystack.index_of(&text("1a31e")), 3);
}

#[test]
fn module_address_splits_into_package_and_module() {
    let module = schema().module_address().unwrap();
    let (package, name) = decompose_module_address(&module).unwrap();
    assert_eq!(package.to_string(), SCHEMA_PKG);
    assert_eq!(name, "schema");
}

#[test]
fn package_id_is_binary_of_prefix() {
    let id = derive_package_id(&schema()).unwrap();
    assert_eq!(id, BinaryId::from_hex(SCHEMA_PKG).unwrap());
    assert_eq!(id.as_bytes()[0], 0x21);
}

#[test]
fn generic_arguments_share_no_module_with_outer_type() {
    // The SUI argument of Coin<SUI> is never split out by decomposition
    let body = coin_of_sui().struct_name().unwrap();
    assert!(body.contains(&text("::sui::")));
    assert_eq!(
        coin_of_sui().module_address().unwrap().module_name().unwrap(),
        "coin"
    );
}

#[test]
fn constructed_name_for_uninstantiated_type() {
    let module: ModuleAddress = format!("{FRAMEWORK}::coin").parse().unwrap();
    let metadata = AsciiText::try_from(format!("CoinMetadata<{FRAMEWORK}::sui::SUI>")).unwrap();

    let full = append_struct_name(&module, &metadata);

    assert!(full.is_same_module(&coin_of_sui()).unwrap());
    assert_eq!(full.struct_name().unwrap(), metadata);
    assert_eq!(full.package_id().unwrap(), coin_of_sui().package_id().unwrap());
}
