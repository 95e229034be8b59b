use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::stage_record;
use crate::form::state::FormState;
use crate::model::pessoal::{Empregado, PeriodoRemuneracao};
use crate::sections::section_doc;

const STAGING_PERIODOS: &str = "staging-periodos-list";
const LISTA_EMPREGADOS: &str = "lista-empregados";

/// Stage one monthly remuneration period for the employee being composed.
pub fn add_periodo_remuneracao(state: &mut FormState) -> Result<(), FormError> {
    let (Some(mes), Some(carga), Some(bruta)) = (
        state.integer("rem-mes"),
        state.number("rem-carga"),
        state.number("rem-bruta"),
    ) else {
        return Err(FormError::IncompleteRecord {
            message: "Preencha todos os campos do período.".to_string(),
        });
    };

    let periodo = PeriodoRemuneracao {
        mes,
        carga_horaria: carga,
        remuneracao_bruta: bruta,
    };
    let display = format!("Mês: {} | Carga: {}h | R$ {:.2}", mes, carga, bruta);
    stage_record(state, STAGING_PERIODOS, &periodo, display)?;

    state.clear_inputs(&["rem-mes", "rem-carga", "rem-bruta"]);
    Ok(())
}

/// Absorb the staged periods into a new employee record, stage it into the
/// employee list and reset the staging buffer for the next employee.
pub fn save_empregado(state: &mut FormState) -> Result<(), FormError> {
    let cpf = state.text("emp-cpf").to_string();
    let data_admissao = state.text("emp-data-admissao").to_string();
    let Some(salario) = state.number("emp-salario-contratual") else {
        return Err(FormError::IncompleteRecord {
            message: "Preencha CPF, Admissão e Salário.".to_string(),
        });
    };
    if cpf.is_empty() || data_admissao.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Preencha CPF, Admissão e Salário.".to_string(),
        });
    }

    let periodos: Vec<PeriodoRemuneracao> = state.records_in(STAGING_PERIODOS)?;
    if periodos.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Adicione ao menos um período de remuneração.".to_string(),
        });
    }

    let empregado = Empregado {
        cpf: cpf.clone(),
        data_admissao: data_admissao.clone(),
        data_demissao: state.optional_text("emp-data-demissao"),
        cbo: state.text("emp-cbo").to_string(),
        cns: state.text("emp-cns").to_string(),
        salario_contratual: salario,
        periodos_remuneracao: periodos,
    };

    let display = format!(
        "{} (Adm: {}) - {} períodos",
        cpf,
        data_admissao,
        empregado.periodos_remuneracao.len()
    );
    stage_record(state, LISTA_EMPREGADOS, &empregado, display)?;

    state.clear_inputs(&[
        "emp-cpf",
        "emp-data-admissao",
        "emp-data-demissao",
        "emp-cbo",
        "emp-cns",
        "emp-salario-contratual",
    ]);
    state.clear_list(STAGING_PERIODOS);
    Ok(())
}

pub fn build(state: &FormState) -> Result<Vec<Empregado>, FormError> {
    state.records_in(LISTA_EMPREGADOS)
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("relacao_empregados", &build(state)?)
}
