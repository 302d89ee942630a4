//! Attribute slots keyed by type identity

use crate::common::*;
use tyname::{slot, AttributeStore, InMemoryAttributeStore, Value, ValueKind};

#[test]
fn overwrite_with_different_kind_keeps_only_latest() {
    init_tracing();
    let store = InMemoryAttributeStore::new();
    let e = entity(0x42);

    slot::set(&store, &e, "display", Value::U64(1)).unwrap();
    slot::set(&store, &e, "display", Value::TypeName(coin_of_sui())).unwrap();

    assert_eq!(store.kind_of(&e, "display"), Some(ValueKind::TypeName));
    assert_eq!(
        slot::get(&store, &e, "display"),
        Some(Value::TypeName(coin_of_sui()))
    );
    assert_eq!(store.fields_of(&e), vec!["display"]);
}

#[test]
fn drop_removes_and_tolerates_absence() {
    let store = InMemoryAttributeStore::new();
    let e = entity(0x43);

    slot::set(&store, &e, "owner", Value::Address(schema().package_id().unwrap())).unwrap();
    assert!(slot::drop(&store, &e, "owner").unwrap().is_some());
    assert!(slot::drop(&store, &e, "owner").unwrap().is_none());
    assert!(!store.exists(&e, "owner"));
}

#[test]
fn attribute_keyed_by_struct_name() {
    let store = InMemoryAttributeStore::new();
    let e = entity(0x44);
    let key = treasury_cap_of_sui().struct_name().unwrap().to_string();

    slot::set(&store, &e, &key, Value::Bool(true)).unwrap();
    assert_eq!(slot::get(&store, &e, &key), Some(Value::Bool(true)));
}
