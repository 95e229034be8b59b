use serde::{Deserialize, Serialize};

// ============================================================================
// Shapes shared across sections: credor identification blocks, empenho and
// fiscal-document references, and the publication entry reused by five
// sections. Keys are the external schema's exact identifiers.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credor {
    pub documento_tipo: Option<i64>,
    pub documento_numero: String,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificacaoCredor {
    pub documento_tipo: Option<i64>,
    pub documento_numero: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificacaoContrato {
    pub numero: String,
    pub data_assinatura: String,
    pub identificacao_credor: IdentificacaoCredor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificacaoDocumentoFiscal {
    pub numero: String,
    pub identificacao_credor: IdentificacaoCredor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificacaoEmpenho {
    pub numero: String,
    pub data_emissao: String,
}

/// One publication entry (official gazette, newspaper, website).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publicacao {
    pub tipo_veiculo_publicacao: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_veiculo: Option<String>,
    pub data_publicacao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco_internet: Option<String>,
}
