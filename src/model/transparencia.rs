use serde::{Deserialize, Serialize};

// ============================================================================
// Transparency requirements: the entity's websites and the per-article
// requirement checklists. `atende` is a real boolean here; the string
// literal from the select is normalized at staging time.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requisito {
    pub requisito: i64,
    pub atende: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transparencia {
    pub entidade_beneficiaria_mantem_sitio_internet: bool,
    pub sitios_internet: Vec<String>,
    pub requisitos_artigos_7o_8o_paragrafo_1o: Vec<Requisito>,
    pub requisitos_sitio_artigo_8o_paragrafo_3o: Vec<Requisito>,
    pub requisitos_divulgacao_informacoes: Vec<Requisito>,
}
