use serde::{Deserialize, Serialize};

use crate::model::numero::real;

// ============================================================================
// Asset movements: movable and immovable goods acquired, ceded or written
// off during the period. Six independent sub-lists under one section.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemMovelAdquirido {
    pub numero_patrimonio: String,
    pub data_aquisicao: String,
    #[serde(with = "real")]
    pub valor_aquisicao: f64,
    pub descricao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemMovelCedido {
    pub numero_patrimonio: String,
    pub data_cessao: String,
    #[serde(with = "real")]
    pub valor_cessao: f64,
    pub descricao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemMovelBaixado {
    pub numero_patrimonio: String,
    pub data_baixa_devolucao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemImovelAdquirido {
    pub descricao: String,
    pub data_aquisicao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemImovelCedido {
    pub descricao: String,
    pub data_cessao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemImovelBaixado {
    pub descricao: String,
    pub data_baixa_devolucao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelacaoBens {
    pub relacao_bens_moveis_adquiridos: Vec<BemMovelAdquirido>,
    pub relacao_bens_moveis_cedidos: Vec<BemMovelCedido>,
    pub relacao_bens_moveis_baixados_devolvidos: Vec<BemMovelBaixado>,
    pub relacao_bens_imoveis_adquiridos: Vec<BemImovelAdquirido>,
    pub relacao_bens_imoveis_cedidos: Vec<BemImovelCedido>,
    pub relacao_bens_imoveis_baixados_devolvidos: Vec<BemImovelBaixado>,
}
