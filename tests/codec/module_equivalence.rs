//! `is_same_module` behaves as an equivalence relation

use crate::common::*;
use tyname::{is_same_module, TypeName};

fn samples() -> Vec<TypeName> {
    vec![
        coin_of_sui(),
        treasury_cap_of_sui(),
        sui(),
        schema(),
        type_name(&format!("{FRAMEWORK}::coin::CoinMetadata<{SCHEMA_PKG}::schema::Schema>")),
        type_name(&format!("{SCHEMA_PKG}::coin::Coin")),
    ]
}

#[test]
fn coin_and_treasury_cap_share_module() {
    assert!(is_same_module(&coin_of_sui(), &treasury_cap_of_sui()).unwrap());
}

#[test]
fn unrelated_modules_differ() {
    assert!(!is_same_module(&coin_of_sui(), &sui()).unwrap());
    assert!(!is_same_module(&coin_of_sui(), &schema()).unwrap());
}

#[test]
fn reflexive() {
    for a in samples() {
        assert!(is_same_module(&a, &a).unwrap(), "{a} not related to itself");
    }
}

#[test]
fn symmetric() {
    let s = samples();
    for a in &s {
        for b in &s {
            assert_eq!(
                is_same_module(a, b).unwrap(),
                is_same_module(b, a).unwrap(),
                "asymmetric for {a} / {b}"
            );
        }
    }
}

#[test]
fn transitive() {
    let s = samples();
    for a in &s {
        for b in &s {
            for c in &s {
                if is_same_module(a, b).unwrap() && is_same_module(b, c).unwrap() {
                    assert!(is_same_module(a, c).unwrap(), "intransitive: {a} / {b} / {c}");
                }
            }
        }
    }
}
