use serde::{Deserialize, Serialize};

// ============================================================================
// Header and registry sections: document descriptor, entity certificates,
// grantor-body members and the accounts-rendering reference period.
// ============================================================================

/// Document header: which municipality, entity and period this report covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descritor {
    pub tipo_documento: String,
    pub municipio: Option<i64>,
    pub entidade: Option<i64>,
    pub ano: Option<i64>,
    pub mes: Option<i64>,
}

/// Certificate ids for the beneficiary entity's registry data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DadosGeraisEntidade {
    pub identificacao_certidao_dados_gerais: String,
    pub identificacao_certidao_corpo_diretivo: String,
    pub identificacao_certidao_membros_conselho: String,
    pub identificacao_certidao_responsaveis: String,
}

/// Certificate ids for the grantor body's responsible members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsaveisOrgao {
    pub identificacao_certidao_responsaveis: String,
    pub identificacao_certidao_membros_comissao_avaliacao: String,
    pub identificacao_certidao_membros_controle_interno: String,
}

/// When the accounts were rendered and the period they refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrestacaoContasEntidade {
    pub data_prestacao: String,
    pub periodo_referencia_data_inicial: String,
    pub periodo_referencia_data_final: String,
}
