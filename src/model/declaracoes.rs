use serde::{Deserialize, Serialize};

// ============================================================================
// Conflict-of-interest declarations: companies owned by directors and
// directors' participation among the contracted parties.
// ============================================================================

/// Both documents are kept even when empty; the user must fill at least one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpresaPertencente {
    pub cnpj: String,
    pub cpf: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipacaoDiretivo {
    pub cpf_dirigente: String,
    pub cpf_contratados: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declaracoes {
    pub houve_contratacao_empresas_pertencentes: bool,
    pub empresas_pertencentes: Vec<EmpresaPertencente>,
    pub houve_participacao_quadro_diretivo_administrativo: bool,
    pub participacoes_quadro_diretivo_administrativo: Vec<ParticipacaoDiretivo>,
}
