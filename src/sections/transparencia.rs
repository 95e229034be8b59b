use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::{add_scalar, stage_record};
use crate::form::state::FormState;
use crate::model::transparencia::{Requisito, Transparencia};
use crate::sections::section_doc;

// ============================================================================
// Transparency page: website list plus three requirement checklists.
// ============================================================================

/// URLs are staged as bare strings, displayed as-is.
pub fn add_sitio_internet(state: &mut FormState) -> Result<(), FormError> {
    add_scalar(state, "trans-sitio-url", "lista-sitios-internet", |v| {
        v.to_string()
    })
}

/// Stage one requirement answer; the select's "true"/"false" literal is
/// already a real boolean in the form state.
pub fn add_requisito(state: &mut FormState, prefix: &str, container: &str) -> Result<(), FormError> {
    let Some(numero) = state.integer(&format!("{prefix}-num")) else {
        return Err(FormError::IncompleteRecord {
            message: "Informe o número do requisito.".to_string(),
        });
    };

    let requisito = Requisito {
        requisito: numero,
        atende: state.flag(&format!("{prefix}-atende")),
    };

    let display = format!(
        "Req {}: {}",
        numero,
        if requisito.atende { "Sim" } else { "Não" }
    );
    stage_record(state, container, &requisito, display)?;

    state.clear_input(&format!("{prefix}-num"));
    Ok(())
}

pub fn add_requisito_art78p1(state: &mut FormState) -> Result<(), FormError> {
    add_requisito(state, "req-781", "lista-requisitos-781")
}

pub fn add_requisito_art8p3(state: &mut FormState) -> Result<(), FormError> {
    add_requisito(state, "req-83", "lista-requisitos-83")
}

pub fn add_requisito_divulgacao(state: &mut FormState) -> Result<(), FormError> {
    add_requisito(state, "req-div", "lista-requisitos-divulgacao")
}

pub fn build(state: &FormState) -> Result<Transparencia, FormError> {
    let secao = Transparencia {
        entidade_beneficiaria_mantem_sitio_internet: state.flag("trans-mantem-sitio"),
        sitios_internet: state.scalars_in("lista-sitios-internet"),
        requisitos_artigos_7o_8o_paragrafo_1o: state.records_in("lista-requisitos-781")?,
        requisitos_sitio_artigo_8o_paragrafo_3o: state.records_in("lista-requisitos-83")?,
        requisitos_divulgacao_informacoes: state.records_in("lista-requisitos-divulgacao")?,
    };

    if secao.entidade_beneficiaria_mantem_sitio_internet && secao.sitios_internet.is_empty() {
        return Err(FormError::RuleViolation {
            section: "transparencia",
            message: "Sítio na internet declarado, mas nenhum endereço foi adicionado.".to_string(),
        });
    }

    Ok(secao)
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("transparencia", &build(state)?)
}
