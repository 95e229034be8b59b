use serde::{Deserialize, Serialize};

use crate::model::common::Credor;
use crate::model::numero::real_opcional;

/// A contract signed with the entity's resources. The contracting-nature
/// codes come from a comma-separated input, parsed into an integer array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrato {
    pub numero: String,
    pub credor: Credor,
    pub data_assinatura: String,
    pub vigencia_tipo: Option<i64>,
    pub vigencia_data_inicial: String,
    pub vigencia_data_final: String,
    pub objeto: String,
    pub natureza_contratacao: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natureza_contratacao_outro: Option<String>,
    pub criterio_selecao: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterio_selecao_outro: Option<String>,
    pub artigo_regulamento_compras: String,
    #[serde(with = "real_opcional")]
    pub valor_montante: Option<f64>,
    pub valor_tipo: Option<i64>,
}
