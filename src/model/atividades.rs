use serde::{Deserialize, Serialize};

use crate::model::numero::real_opcional;

// ============================================================================
// Activities report: programas → metas → periodicidades, composed through
// two levels of staging absorption.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Periodicidade {
    pub periodo: i64,
    #[serde(skip_serializing_if = "Option::is_none", default, with = "real_opcional")]
    pub quantidade_realizada: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resultado_meta: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justificativa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub codigo_meta: String,
    pub meta_atendida: bool,
    pub periodicidades: Vec<Periodicidade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Programa {
    pub nome_programa: String,
    pub metas: Vec<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatorioAtividades {
    pub programas: Vec<Programa>,
}
