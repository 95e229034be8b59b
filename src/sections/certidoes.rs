use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::state::FormState;
use crate::model::cadastro::{DadosGeraisEntidade, PrestacaoContasEntidade, ResponsaveisOrgao};
use crate::sections::section_doc;

// ============================================================================
// Certificate-only pages: no staging lists, just top-level fields.
// ============================================================================

pub fn build_dados_gerais(state: &FormState) -> DadosGeraisEntidade {
    DadosGeraisEntidade {
        identificacao_certidao_dados_gerais: state.text("certidao-dados-gerais").to_string(),
        identificacao_certidao_corpo_diretivo: state.text("certidao-corpo-diretivo").to_string(),
        identificacao_certidao_membros_conselho: state
            .text("certidao-membros-conselho")
            .to_string(),
        identificacao_certidao_responsaveis: state
            .text("certidao-responsaveis-entidade")
            .to_string(),
    }
}

pub fn build_responsaveis_orgao(state: &FormState) -> ResponsaveisOrgao {
    ResponsaveisOrgao {
        identificacao_certidao_responsaveis: state
            .text("certidao-responsaveis-concessor")
            .to_string(),
        identificacao_certidao_membros_comissao_avaliacao: state
            .text("certidao-membros-comissao")
            .to_string(),
        identificacao_certidao_membros_controle_interno: state
            .text("certidao-membros-controle")
            .to_string(),
    }
}

pub fn build_prestacao_contas(state: &FormState) -> PrestacaoContasEntidade {
    PrestacaoContasEntidade {
        data_prestacao: state.text("pc-data-prestacao").to_string(),
        periodo_referencia_data_inicial: state.text("pc-data-ref-inicio").to_string(),
        periodo_referencia_data_final: state.text("pc-data-ref-final").to_string(),
    }
}

pub fn document_dados_gerais(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("dados_gerais_entidade_beneficiaria", &build_dados_gerais(state))
}

pub fn document_responsaveis_orgao(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc(
        "responsaveis_membros_orgao_concessor",
        &build_responsaveis_orgao(state),
    )
}

pub fn document_prestacao_contas(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc(
        "prestacao_contas_entidade_beneficiaria",
        &build_prestacao_contas(state),
    )
}
