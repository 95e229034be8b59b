use serde_json::json;

use prestacao_contas::error::FormError;
use prestacao_contas::form::field::{FieldDescriptor, FieldKind, add_item, add_scalar, collect_record};
use prestacao_contas::form::state::FormState;
use prestacao_contas::form::value::number_value;

// =========================================================================
// Helpers
// =========================================================================

fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::required("item-nome", "nome", "Nome", FieldKind::Text),
        FieldDescriptor::required("item-valor", "valor", "Valor", FieldKind::Number),
        FieldDescriptor::optional("item-obs", "observacao", "Observação", FieldKind::Text),
    ]
}

// =========================================================================
// collect_record semantics
// =========================================================================

#[test]
fn collect_builds_sparse_record() {
    let mut state = FormState::new();
    state.set_text("item-nome", "Cadeira");
    state.set_text("item-valor", "150.5");
    // item-obs left unset

    let record = collect_record(&state, &descriptors()).expect("collection must succeed");

    assert_eq!(record.get("nome"), Some(&json!("Cadeira")));
    assert_eq!(record.get("valor"), Some(&json!(150.5)));
    assert!(
        !record.contains_key("observacao"),
        "null optional fields are omitted, not null-valued"
    );
}

#[test]
fn collect_encodes_whole_numbers_as_integers() {
    let mut state = FormState::new();
    state.set_text("item-nome", "Mesa");
    state.set_text("item-valor", "40");

    let record = collect_record(&state, &descriptors()).expect("collection must succeed");
    assert_eq!(record.get("valor"), Some(&json!(40)), "40, not 40.0");
}

#[test]
fn missing_required_text_fails_with_label() {
    let mut state = FormState::new();
    state.set_text("item-valor", "10");

    let err = collect_record(&state, &descriptors()).unwrap_err();
    match err {
        FormError::MissingRequired { label } => assert_eq!(label, "Nome"),
        other => panic!("expected MissingRequired, got {:?}", other),
    }
}

#[test]
fn non_numeric_input_counts_as_missing() {
    let mut state = FormState::new();
    state.set_text("item-nome", "Mesa");
    state.set_text("item-valor", "abc");

    let err = collect_record(&state, &descriptors()).unwrap_err();
    match err {
        FormError::MissingRequired { label } => assert_eq!(label, "Valor"),
        other => panic!("expected MissingRequired, got {:?}", other),
    }
}

// =========================================================================
// add_item staging protocol
// =========================================================================

#[test]
fn failed_add_leaves_list_unchanged() {
    let mut state = FormState::new();
    state.set_text("item-valor", "10"); // nome missing

    let before = state.list_len("lista-itens");
    let result = add_item(&mut state, &descriptors(), "lista-itens", |_| String::new());

    assert!(result.is_err(), "required field missing must fail the add");
    assert_eq!(
        state.list_len("lista-itens"),
        before,
        "no staged item on failure (all-or-nothing)"
    );
    assert_eq!(
        state.text("item-valor"),
        "10",
        "failed add must not clear the source inputs"
    );
}

#[test]
fn successful_add_stages_and_clears() {
    let mut state = FormState::new();
    state.set_text("item-nome", "Cadeira");
    state.set_text("item-valor", "150");

    add_item(&mut state, &descriptors(), "lista-itens", |d| {
        format!("{} - R$ {}", d["nome"].as_str().unwrap_or(""), d["valor"])
    })
    .expect("add must succeed");

    assert_eq!(state.list_len("lista-itens"), 1, "exactly one item staged");
    assert_eq!(state.text("item-nome"), "", "source inputs cleared");
    assert_eq!(state.text("item-valor"), "", "source inputs cleared");

    let list = state.list("lista-itens").expect("container exists");
    assert_eq!(list.items[0].display, "Cadeira - R$ 150");

    let values = list.values();
    assert_eq!(
        values[0],
        json!({"nome": "Cadeira", "valor": 150}),
        "read-all returns the record built at add time"
    );
}

#[test]
fn scalar_add_stores_raw_string() {
    let mut state = FormState::new();
    state.set_text("cpf-input", "12345678900");

    add_scalar(&mut state, "cpf-input", "lista-cpfs", |v| format!("CPF: {}", v))
        .expect("scalar add must succeed");

    let scalars = state.scalars_in("lista-cpfs");
    assert_eq!(scalars, vec!["12345678900".to_string()]);
    assert_eq!(state.text("cpf-input"), "", "input cleared after staging");
}

#[test]
fn scalar_add_rejects_empty_input() {
    let mut state = FormState::new();

    let result = add_scalar(&mut state, "cpf-input", "lista-cpfs", |v| v.to_string());
    assert!(result.is_err(), "empty scalar input must be rejected");
    assert_eq!(state.list_len("lista-cpfs"), 0);
}

// =========================================================================
// number encoding helper
// =========================================================================

#[test]
fn number_value_is_integer_aware() {
    assert_eq!(number_value(40.0), json!(40));
    assert_eq!(number_value(-3.0), json!(-3));
    assert_eq!(number_value(40.5), json!(40.5));
}
