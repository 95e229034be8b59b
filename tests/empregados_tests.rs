use serde_json::json;

use prestacao_contas::form::state::FormState;
use prestacao_contas::sections::empregados::{add_periodo_remuneracao, build, save_empregado};

// =========================================================================
// Helpers
// =========================================================================

fn stage_periodo(state: &mut FormState, mes: &str, carga: &str, bruta: &str) {
    state.set_text("rem-mes", mes);
    state.set_text("rem-carga", carga);
    state.set_text("rem-bruta", bruta);
    add_periodo_remuneracao(state).expect("período must stage");
}

// =========================================================================
// Staging periods
// =========================================================================

#[test]
fn periodo_requires_all_three_fields() {
    let mut state = FormState::new();
    state.set_text("rem-mes", "1");
    // carga and bruta missing

    assert!(add_periodo_remuneracao(&mut state).is_err());
    assert_eq!(state.list_len("staging-periodos-list"), 0);
}

#[test]
fn periodo_stages_and_clears_inputs() {
    let mut state = FormState::new();
    stage_periodo(&mut state, "1", "40", "1000");

    assert_eq!(state.list_len("staging-periodos-list"), 1);
    assert_eq!(state.text("rem-mes"), "");
    assert_eq!(state.text("rem-carga"), "");

    let list = state.list("staging-periodos-list").expect("container exists");
    assert_eq!(list.items[0].display, "Mês: 1 | Carga: 40h | R$ 1000.00");
}

// =========================================================================
// Saving the employee (absorbs the staged periods)
// =========================================================================

#[test]
fn save_requires_cpf_admissao_and_salario() {
    let mut state = FormState::new();
    stage_periodo(&mut state, "1", "40", "1000");
    state.set_text("emp-cpf", "12345678900");
    // data_admissao and salário missing

    assert!(save_empregado(&mut state).is_err());
    assert_eq!(state.list_len("lista-empregados"), 0);
    assert_eq!(
        state.list_len("staging-periodos-list"),
        1,
        "failed save must not consume the staged periods"
    );
}

#[test]
fn save_requires_at_least_one_periodo() {
    let mut state = FormState::new();
    state.set_text("emp-cpf", "12345678900");
    state.set_text("emp-data-admissao", "2024-01-01");
    state.set_text("emp-salario-contratual", "2000");

    assert!(save_empregado(&mut state).is_err(), "empty staging list blocks the save");
    assert_eq!(state.list_len("lista-empregados"), 0);
}

#[test]
fn save_absorbs_periodos_and_resets_staging() {
    let mut state = FormState::new();
    stage_periodo(&mut state, "1", "40", "1000");
    stage_periodo(&mut state, "2", "40", "1100");

    state.set_text("emp-cpf", "12345678900");
    state.set_text("emp-data-admissao", "2024-01-01");
    state.set_text("emp-salario-contratual", "2000");

    save_empregado(&mut state).expect("save must succeed");

    assert_eq!(
        state.list_len("staging-periodos-list"),
        0,
        "staging buffer is single-use, emptied by the save"
    );
    assert_eq!(state.list_len("lista-empregados"), 1);

    let empregados = build(&state).expect("employee list must parse");
    let encoded = serde_json::to_value(&empregados).expect("serialize employees");
    assert_eq!(
        encoded,
        json!([{
            "cpf": "12345678900",
            "data_admissao": "2024-01-01",
            "data_demissao": null,
            "cbo": "",
            "cns": "",
            "salario_contratual": 2000,
            "periodos_remuneracao": [
                {"mes": 1, "carga_horaria": 40, "remuneracao_bruta": 1000},
                {"mes": 2, "carga_horaria": 40, "remuneracao_bruta": 1100}
            ]
        }]),
        "record must match the schema's employee shape exactly"
    );
}

#[test]
fn second_employee_starts_from_a_fresh_buffer() {
    let mut state = FormState::new();
    stage_periodo(&mut state, "1", "40", "1000");
    state.set_text("emp-cpf", "111");
    state.set_text("emp-data-admissao", "2024-01-01");
    state.set_text("emp-salario-contratual", "1500");
    save_empregado(&mut state).expect("first save");

    stage_periodo(&mut state, "3", "20", "500");
    state.set_text("emp-cpf", "222");
    state.set_text("emp-data-admissao", "2024-02-01");
    state.set_text("emp-salario-contratual", "900");
    save_empregado(&mut state).expect("second save");

    let empregados = build(&state).expect("employee list must parse");
    assert_eq!(empregados.len(), 2);
    assert_eq!(empregados[0].periodos_remuneracao.len(), 1);
    assert_eq!(
        empregados[1].periodos_remuneracao[0].mes, 3,
        "second employee only absorbs its own periods"
    );
}
