use serde::{Deserialize, Serialize};

/// Final-report verdict shared by the evaluation-commission, governmental
/// and monitoring sections: the three carry the same shape under different
/// document keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatorioAvaliacao {
    pub houve_emissao_relatorio_final: bool,
    pub conclusao_relatorio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justificativa: Option<String>,
}
