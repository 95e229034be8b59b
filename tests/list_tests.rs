use serde_json::json;

use prestacao_contas::form::list::{ListStore, StagedItem, StagedValue};

// =========================================================================
// Helpers
// =========================================================================

fn store_with(names: &[&str]) -> ListStore {
    let mut list = ListStore::new("lista-teste");
    for name in names {
        list.push(StagedItem::record(json!({"nome": name}), *name));
    }
    list
}

// =========================================================================
// Ordering and removal
// =========================================================================

#[test]
fn insertion_order_is_serialization_order() {
    let list = store_with(&["a", "b", "c"]);
    let values = list.values();

    assert_eq!(values.len(), 3);
    assert_eq!(values[0], json!({"nome": "a"}));
    assert_eq!(values[2], json!({"nome": "c"}));
}

#[test]
fn remove_detaches_exactly_one_item() {
    let mut list = store_with(&["a", "b", "c"]);
    list.remove(1);

    let values = list.values();
    assert_eq!(
        values,
        vec![json!({"nome": "a"}), json!({"nome": "c"})],
        "remaining items keep insertion order"
    );
}

#[test]
fn out_of_range_remove_is_ignored() {
    let mut list = store_with(&["a"]);
    list.remove(5);
    assert_eq!(list.len(), 1, "nothing detached");
}

#[test]
fn bulk_clear_empties_the_buffer() {
    let mut list = store_with(&["a", "b"]);
    list.clear();
    assert!(list.is_empty());
    assert!(list.values().is_empty());
}

// =========================================================================
// Typed read-all
// =========================================================================

#[test]
fn records_parses_in_order() {
    #[derive(serde::Deserialize, PartialEq, Debug)]
    struct Item {
        nome: String,
    }

    let list = store_with(&["x", "y"]);
    let items: Vec<Item> = list.records().expect("staged records must parse");
    assert_eq!(items[0].nome, "x");
    assert_eq!(items[1].nome, "y");
}

#[test]
fn records_rejects_mismatched_shape() {
    #[derive(serde::Deserialize, Debug)]
    struct Typed {
        #[allow(dead_code)]
        valor: f64,
    }

    let list = store_with(&["a"]);
    let result: Result<Vec<Typed>, _> = list.records();
    assert!(result.is_err(), "shape mismatch must surface as an error");
}

#[test]
fn scalars_skips_record_items() {
    let mut list = ListStore::new("lista-mista");
    list.push(StagedItem::scalar("111", "CPF: 111"));
    list.push(StagedItem::record(json!({"a": 1}), "rec"));
    list.push(StagedItem::scalar("222", "CPF: 222"));

    assert_eq!(list.scalars(), vec!["111".to_string(), "222".to_string()]);
}

// =========================================================================
// Staged item serde shape
// =========================================================================

#[test]
fn staged_item_roundtrips_through_json() {
    let items = vec![
        StagedItem::scalar("https://example.org", "https://example.org"),
        StagedItem::record(json!({"mes": 1, "valor": 10.5}), "Mês 1"),
    ];

    let encoded = serde_json::to_string(&items).expect("serialize staged items");
    let decoded: Vec<StagedItem> = serde_json::from_str(&encoded).expect("parse staged items");

    assert_eq!(items, decoded, "roundtrip must preserve both variants");
    assert!(matches!(decoded[0].value, StagedValue::Scalar(_)));
    assert!(matches!(decoded[1].value, StagedValue::Record(_)));
}
