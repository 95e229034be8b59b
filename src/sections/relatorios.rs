use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::state::FormState;
use crate::model::relatorios::RelatorioAvaliacao;
use crate::sections::section_doc;

// ============================================================================
// Three evaluation-report pages share one shape; `prefix` selects the
// page's input ids.
// ============================================================================

pub fn build_relatorio(state: &FormState, prefix: &str) -> RelatorioAvaliacao {
    RelatorioAvaliacao {
        houve_emissao_relatorio_final: state.flag(&format!("{prefix}-houve-emissao")),
        conclusao_relatorio: state.integer(&format!("{prefix}-conclusao")),
        justificativa: state.optional_text(&format!("{prefix}-justificativa")),
    }
}

pub fn document_comissao(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc(
        "relatorio_comissao_avaliacao",
        &build_relatorio(state, "comissao"),
    )
}

pub fn document_governamental(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc(
        "relatorio_governamental_analise_execucao",
        &build_relatorio(state, "gov"),
    )
}

pub fn document_monitoramento(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc(
        "relatorio_monitoramento_avaliacao",
        &build_relatorio(state, "monit"),
    )
}
