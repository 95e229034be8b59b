use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::{FieldDescriptor, FieldKind, add_item};
use crate::form::state::FormState;
use crate::model::parecer::ParecerConclusivo;
use crate::sections::{field_text, section_doc};

const LISTA_DECLARACOES: &str = "lista-declaracoes-parecer";

// ============================================================================
// Conclusive-opinion page.
// ============================================================================

pub fn add_declaracao_parecer(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("pc-decl-tipo", "tipo_declaracao", "Tipo", FieldKind::Number),
        FieldDescriptor::required("pc-decl-declaracao", "declaracao", "Declaração", FieldKind::Text),
        FieldDescriptor::optional("pc-decl-justificativa", "justificativa", "Justif.", FieldKind::Text),
    ];
    add_item(state, &fields, LISTA_DECLARACOES, |d| {
        format!("Decl. Tipo {}", field_text(d, "tipo_declaracao"))
    })
}

pub fn build(state: &FormState) -> Result<ParecerConclusivo, FormError> {
    Ok(ParecerConclusivo {
        identificacao_parecer: state.text("pc-identificacao").to_string(),
        conclusao_parecer: state.integer("pc-conclusao"),
        consideracoes_parecer: state.optional_text("pc-consideracoes"),
        declaracoes: state.records_in(LISTA_DECLARACOES)?,
    })
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("parecer_conclusivo", &build(state)?)
}
