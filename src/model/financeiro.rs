use serde::{Deserialize, Serialize};

use crate::model::common::IdentificacaoDocumentoFiscal;
use crate::model::numero::{real, real_opcional};

// ============================================================================
// Financial position sections: bank balances, revenue, balance adjustments,
// discounts and returns to the public treasury.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saldo {
    pub banco: i64,
    pub agencia: i64,
    pub conta: String,
    pub conta_tipo: i64,
    #[serde(with = "real")]
    pub saldo_bancario: f64,
    #[serde(with = "real")]
    pub saldo_contabil: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Disponibilidades {
    pub saldos: Vec<Saldo>,
    #[serde(with = "real")]
    pub saldo_fundo_fixo: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepasseRecebido {
    pub data_prevista: String,
    pub data_repasse: String,
    #[serde(with = "real")]
    pub valor: f64,
    pub fonte_recurso_tipo: i64,
}

/// Description/value entry, used by both "outras receitas" and
/// "recursos próprios" (the schema gives them the same shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceitaLancamento {
    pub descricao: String,
    #[serde(with = "real")]
    pub valor: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receitas {
    #[serde(with = "real")]
    pub receitas_aplic_financ_repasses_publicos_municipais: f64,
    #[serde(with = "real")]
    pub receitas_aplic_financ_repasses_publicos_estaduais: f64,
    #[serde(with = "real")]
    pub receitas_aplic_financ_repasses_publicos_federais: f64,
    pub repasses_recebidos: Vec<RepasseRecebido>,
    pub outras_receitas: Vec<ReceitaLancamento>,
    pub recursos_proprios: Vec<ReceitaLancamento>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetificacaoRepasse {
    pub data_prevista: String,
    pub data_repasse: String,
    #[serde(with = "real")]
    pub valor_retificado: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclusaoRepasse {
    pub data_prevista: String,
    pub data_repasse: String,
    #[serde(with = "real")]
    pub valor: f64,
    pub fonte_recurso_tipo: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetificacaoPagamento {
    pub identificacao_documento_fiscal: IdentificacaoDocumentoFiscal,
    pub pagamento_data: String,
    #[serde(with = "real_opcional")]
    pub pagamento_valor: Option<f64>,
    pub fonte_recurso_tipo: Option<i64>,
    #[serde(with = "real_opcional")]
    pub valor_retificado: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclusaoPagamento {
    pub identificacao_documento_fiscal: IdentificacaoDocumentoFiscal,
    pub pagamento_data: String,
    #[serde(with = "real_opcional")]
    pub pagamento_valor: Option<f64>,
    pub fonte_recurso_tipo: Option<i64>,
    pub meio_pagamento_tipo: Option<i64>,
    pub banco: Option<i64>,
    pub agencia: Option<i64>,
    pub conta_corrente: String,
    pub numero_transacao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AjustesSaldo {
    pub retificacao_repasses: Vec<RetificacaoRepasse>,
    pub inclusao_repasses: Vec<InclusaoRepasse>,
    pub retificacao_pagamentos: Vec<RetificacaoPagamento>,
    pub inclusao_pagamentos: Vec<InclusaoPagamento>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Desconto {
    pub data: String,
    pub descricao: String,
    #[serde(with = "real")]
    pub valor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devolucao {
    pub data: String,
    pub natureza_devolucao_tipo: i64,
    #[serde(with = "real")]
    pub valor: f64,
}
