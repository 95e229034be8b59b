use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::stage_record;
use crate::form::state::FormState;
use crate::model::pessoal::{PeriodoCessao, ServidorCedido};
use crate::sections::section_doc;

const STAGING_CESSAO: &str = "staging-periodos-cessao-list";
const LISTA_SERVIDORES: &str = "lista-servidores-cedidos";

// ============================================================================
// Ceded public servants page. Cession periods tolerate partial entries;
// only the month is mandatory.
// ============================================================================

pub fn add_periodo_cessao(state: &mut FormState) -> Result<(), FormError> {
    let Some(mes) = state.integer("cessao-mes") else {
        return Err(FormError::IncompleteRecord {
            message: "Informe o mês do período.".to_string(),
        });
    };

    let periodo = PeriodoCessao {
        mes,
        carga_horaria: state.number("cessao-carga"),
        remuneracao_bruta: state.number("cessao-bruta"),
    };
    let display = format!("Mês {}", mes);
    stage_record(state, STAGING_CESSAO, &periodo, display)?;

    state.clear_input("cessao-mes");
    Ok(())
}

pub fn save_servidor_cedido(state: &mut FormState) -> Result<(), FormError> {
    let cpf = state.text("serv-cpf").to_string();
    if cpf.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Preencha o CPF".to_string(),
        });
    }

    let servidor = ServidorCedido {
        cpf: cpf.clone(),
        data_inicial_cessao: state.text("serv-data-inicio").to_string(),
        data_final_cessao: state.text("serv-data-final").to_string(),
        cargo_publico_ocupado: state.text("serv-cargo").to_string(),
        funcao_desempenhada_entidade_beneficiaria: state.text("serv-funcao").to_string(),
        onus_pagamento: state.integer("serv-onus"),
        periodos_cessao: state.records_in(STAGING_CESSAO)?,
    };

    let display = format!("{} ({} períodos)", cpf, servidor.periodos_cessao.len());
    stage_record(state, LISTA_SERVIDORES, &servidor, display)?;

    state.clear_input("serv-cpf");
    state.clear_list(STAGING_CESSAO);
    Ok(())
}

pub fn build(state: &FormState) -> Result<Vec<ServidorCedido>, FormError> {
    state.records_in(LISTA_SERVIDORES)
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("servidores_cedidos", &build(state)?)
}
