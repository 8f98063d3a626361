//! Property tests over generated documents.

use proptest::prelude::*;
use serde_json::{json, Value};

use lingo_types::{LangCode, LangMap};

use crate::{merge, unmerge};

/// Arbitrary documents. Some object keys start with `@`, but none is `@` plus
/// one of the two-letter codes used below.
fn arb_document() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("@?[a-z]{3,6}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// A translation of `doc` into `lang`: same shape, some strings changed.
fn translate(doc: &Value, lang: &str) -> Value {
    match doc {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), translate(v, lang)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(|v| translate(v, lang)).collect()),
        Value::String(s) if s.len() % 2 == 1 => Value::String(format!("{s}/{lang}")),
        other => other.clone(),
    }
}

fn lang_map(doc: &Value, codes: &[&str]) -> LangMap {
    codes
        .iter()
        .map(|code| (LangCode::new(*code).unwrap(), translate(doc, code)))
        .collect()
}

proptest! {
    #[test]
    fn single_language_is_identity(doc in arb_document()) {
        let mut langs = LangMap::new();
        langs.insert(LangCode::new("en").unwrap(), doc.clone());
        prop_assert_eq!(merge(&langs).unwrap(), doc);
    }

    #[test]
    fn unmerge_inverts_merge(doc in arb_document(), extra in prop::bool::ANY) {
        let codes: &[&str] = if extra { &["de", "en", "fr"] } else { &["en", "fr"] };
        let langs = lang_map(&doc, codes);
        let merged = merge(&langs).unwrap();
        let order: Vec<LangCode> = langs.keys().cloned().collect();
        prop_assert_eq!(unmerge(&merged, &order).unwrap(), langs);
    }

    #[test]
    fn identical_variants_merge_to_themselves(doc in arb_document()) {
        let mut langs = LangMap::new();
        langs.insert(LangCode::new("en").unwrap(), doc.clone());
        langs.insert(LangCode::new("fr").unwrap(), doc.clone());
        prop_assert_eq!(merge(&langs).unwrap(), doc);
    }
}
