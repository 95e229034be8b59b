use serde::{Deserialize, Serialize};

use crate::model::common::{Credor, IdentificacaoContrato, IdentificacaoDocumentoFiscal};
use crate::model::numero::{real, real_opcional};

// ============================================================================
// Expense execution: fiscal documents, the payments that settle them and
// the glosas (disallowed amounts) found during analysis.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentoFiscal {
    pub numero: String,
    pub data_emissao: String,
    pub descricao: String,
    pub credor: Credor,
    pub identificacao_contrato: IdentificacaoContrato,
    #[serde(with = "real")]
    pub valor_bruto: f64,
    #[serde(with = "real_opcional")]
    pub valor_encargos: Option<f64>,
    pub categoria_despesas_tipo: Option<i64>,
    pub rateio_proveniente_tipo: Option<i64>,
    #[serde(with = "real_opcional")]
    pub rateio_percentual: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagamento {
    pub identificacao_documento_fiscal: IdentificacaoDocumentoFiscal,
    pub pagamento_data: String,
    #[serde(with = "real")]
    pub pagamento_valor: f64,
    pub fonte_recurso_tipo: Option<i64>,
    pub meio_pagamento_tipo: Option<i64>,
    pub banco: Option<i64>,
    pub agencia: Option<i64>,
    pub conta_corrente: String,
    pub numero_transacao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glosa {
    pub identificacao_documento_fiscal: IdentificacaoDocumentoFiscal,
    pub resultado_analise: Option<i64>,
    #[serde(with = "real_opcional")]
    pub valor_glosa: Option<f64>,
}
