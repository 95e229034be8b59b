use serde::{Deserialize, Serialize};

use crate::model::common::IdentificacaoEmpenho;
use crate::model::numero::{real, real_opcional};

// ============================================================================
// Budget-side sections: commitments (empenhos) issued by the grantor and
// the transfers (repasses) that execute them.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empenho {
    pub numero: String,
    pub data_emissao: String,
    pub classificacao_economica_tipo: i64,
    pub fonte_recurso_tipo: i64,
    #[serde(with = "real")]
    pub valor: f64,
    pub historico: String,
    pub cpf_ordenador_despesa: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repasse {
    pub identificacao_empenho: IdentificacaoEmpenho,
    pub data_prevista: String,
    pub data_repasse: String,
    #[serde(with = "real_opcional")]
    pub valor_previsto: Option<f64>,
    #[serde(with = "real_opcional")]
    pub valor_repasse: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justificativa_diferenca_valor: Option<String>,
    pub tipo_documento_bancario: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao_outros: Option<String>,
    pub numero_documento: String,
    pub banco: Option<i64>,
    pub agencia: Option<i64>,
    pub conta: String,
}
