use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::stage_record;
use crate::form::state::FormState;
use crate::model::atividades::{Meta, Periodicidade, Programa, RelatorioAtividades};
use crate::sections::section_doc;

const STAGING_PERIODICIDADES: &str = "staging-periodicidades-list";
const STAGING_METAS: &str = "staging-metas-list";
const LISTA_PROGRAMAS: &str = "lista-programas";

// ============================================================================
// Activities report page: two levels of staging. Periodicidades are
// absorbed into a meta, staged metas into a programa.
// ============================================================================

pub fn add_periodicidade(state: &mut FormState) -> Result<(), FormError> {
    let Some(periodo) = state.integer("periodo-num") else {
        return Err(FormError::IncompleteRecord {
            message: "Informe o período".to_string(),
        });
    };

    let periodicidade = Periodicidade {
        periodo,
        quantidade_realizada: state.number("periodo-qtd"),
        resultado_meta: state.integer("periodo-res"),
        justificativa: state.optional_text("periodo-just"),
    };
    let display = format!("Período {}", periodo);
    stage_record(state, STAGING_PERIODICIDADES, &periodicidade, display)?;

    state.clear_input("periodo-num");
    Ok(())
}

pub fn save_meta(state: &mut FormState) -> Result<(), FormError> {
    let codigo = state.text("meta-codigo").to_string();
    if codigo.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe o código da meta".to_string(),
        });
    }

    let meta = Meta {
        codigo_meta: codigo.clone(),
        meta_atendida: state.flag("meta-atendida"),
        periodicidades: state.records_in(STAGING_PERIODICIDADES)?,
    };

    let display = format!("Meta {}", codigo);
    stage_record(state, STAGING_METAS, &meta, display)?;

    state.clear_input("meta-codigo");
    state.clear_list(STAGING_PERIODICIDADES);
    Ok(())
}

pub fn save_programa(state: &mut FormState) -> Result<(), FormError> {
    let nome = state.text("programa-nome").to_string();
    if nome.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe o nome do programa".to_string(),
        });
    }

    let programa = Programa {
        nome_programa: nome.clone(),
        metas: state.records_in(STAGING_METAS)?,
    };

    let display = format!("Programa {} ({} metas)", nome, programa.metas.len());
    stage_record(state, LISTA_PROGRAMAS, &programa, display)?;

    state.clear_input("programa-nome");
    state.clear_list(STAGING_METAS);
    Ok(())
}

pub fn build(state: &FormState) -> Result<RelatorioAtividades, FormError> {
    Ok(RelatorioAtividades {
        programas: state.records_in(LISTA_PROGRAMAS)?,
    })
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("relatorio_atividades", &build(state)?)
}
