use serde::{Deserialize, Serialize};

// ============================================================================
// Conclusive opinion of the internal control body.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclaracaoParecer {
    pub tipo_declaracao: i64,
    pub declaracao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justificativa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParecerConclusivo {
    pub identificacao_parecer: String,
    pub conclusao_parecer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consideracoes_parecer: Option<String>,
    pub declaracoes: Vec<DeclaracaoParecer>,
}
