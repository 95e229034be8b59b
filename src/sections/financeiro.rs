use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::{FieldDescriptor, FieldKind, add_item, stage_record};
use crate::form::state::FormState;
use crate::model::common::{IdentificacaoCredor, IdentificacaoDocumentoFiscal};
use crate::model::financeiro::{
    AjustesSaldo, Desconto, Devolucao, Disponibilidades, InclusaoPagamento, Receitas,
    RetificacaoPagamento,
};
use crate::sections::{field_text, section_doc};

// ============================================================================
// Availability page: bank balances.
// ============================================================================

pub fn add_saldo(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("saldo-banco", "banco", "Banco", FieldKind::Number),
        FieldDescriptor::required("saldo-agencia", "agencia", "Agência", FieldKind::Number),
        FieldDescriptor::required("saldo-conta", "conta", "Conta", FieldKind::Text),
        FieldDescriptor::required("saldo-conta-tipo", "conta_tipo", "Tipo", FieldKind::Number),
        FieldDescriptor::required("saldo-bancario", "saldo_bancario", "Saldo Bancário", FieldKind::Number),
        FieldDescriptor::required("saldo-contabil", "saldo_contabil", "Saldo Contábil", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-saldos", |d| {
        format!("Conta: {} - Saldo: R$ {}", field_text(d, "conta"), field_text(d, "saldo_bancario"))
    })
}

pub fn build_disponibilidades(state: &FormState) -> Result<Disponibilidades, FormError> {
    Ok(Disponibilidades {
        saldos: state.records_in("lista-saldos")?,
        saldo_fundo_fixo: state.number("disp-fundo-fixo").unwrap_or(0.0),
    })
}

pub fn document_disponibilidades(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("disponibilidades", &build_disponibilidades(state)?)
}

// ============================================================================
// Revenue page: application yields plus three lists.
// ============================================================================

pub fn add_repasse_recebido(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("rep-data-prevista", "data_prevista", "Data Prev.", FieldKind::Text),
        FieldDescriptor::required("rep-data-repasse", "data_repasse", "Data Repasse", FieldKind::Text),
        FieldDescriptor::required("rep-valor", "valor", "Valor", FieldKind::Number),
        FieldDescriptor::required("rep-fonte-recurso", "fonte_recurso_tipo", "Fonte", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-repasses-recebidos", |d| {
        format!("Repasse: {} - R$ {}", field_text(d, "data_repasse"), field_text(d, "valor"))
    })
}

pub fn add_outra_receita(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("outra-descricao", "descricao", "Descrição", FieldKind::Text),
        FieldDescriptor::required("outra-valor", "valor", "Valor", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-outras-receitas", |d| {
        format!("{} - R$ {}", field_text(d, "descricao"), field_text(d, "valor"))
    })
}

pub fn add_recurso_proprio(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("proprio-descricao", "descricao", "Descrição", FieldKind::Text),
        FieldDescriptor::required("proprio-valor", "valor", "Valor", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-recursos-proprios", |d| {
        format!("{} - R$ {}", field_text(d, "descricao"), field_text(d, "valor"))
    })
}

pub fn build_receitas(state: &FormState) -> Result<Receitas, FormError> {
    Ok(Receitas {
        receitas_aplic_financ_repasses_publicos_municipais: state
            .number("rec-aplic-municipais")
            .unwrap_or(0.0),
        receitas_aplic_financ_repasses_publicos_estaduais: state
            .number("rec-aplic-estaduais")
            .unwrap_or(0.0),
        receitas_aplic_financ_repasses_publicos_federais: state
            .number("rec-aplic-federais")
            .unwrap_or(0.0),
        repasses_recebidos: state.records_in("lista-repasses-recebidos")?,
        outras_receitas: state.records_in("lista-outras-receitas")?,
        recursos_proprios: state.records_in("lista-recursos-proprios")?,
    })
}

pub fn document_receitas(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("receitas", &build_receitas(state)?)
}

// ============================================================================
// Balance-adjustment page: rectifications and late inclusions.
// ============================================================================

pub fn add_retificacao_repasse(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("ajuste-rr-data-prevista", "data_prevista", "Data Prev", FieldKind::Text),
        FieldDescriptor::required("ajuste-rr-data-repasse", "data_repasse", "Data Repasse", FieldKind::Text),
        FieldDescriptor::required("ajuste-rr-valor-retificado", "valor_retificado", "Valor", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-retificacao-repasses", |d| {
        format!("Retif. Repasse: {} (R$ {})", field_text(d, "data_repasse"), field_text(d, "valor_retificado"))
    })
}

pub fn add_inclusao_repasse(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("ajuste-ir-data-prevista", "data_prevista", "Data Prev", FieldKind::Text),
        FieldDescriptor::required("ajuste-ir-data-repasse", "data_repasse", "Data Repasse", FieldKind::Text),
        FieldDescriptor::required("ajuste-ir-valor", "valor", "Valor", FieldKind::Number),
        FieldDescriptor::required("ajuste-ir-fonte", "fonte_recurso_tipo", "Fonte", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-inclusao-repasses", |d| {
        format!("Incl. Repasse: {} (R$ {})", field_text(d, "data_repasse"), field_text(d, "valor"))
    })
}

pub fn add_retificacao_pagamento(state: &mut FormState) -> Result<(), FormError> {
    let ajuste = RetificacaoPagamento {
        identificacao_documento_fiscal: IdentificacaoDocumentoFiscal {
            numero: state.text("ajuste-rp-doc-numero").to_string(),
            identificacao_credor: IdentificacaoCredor {
                documento_tipo: state.integer("ajuste-rp-credor-tipo"),
                documento_numero: state.text("ajuste-rp-credor-numero").to_string(),
            },
        },
        pagamento_data: state.text("ajuste-rp-data").to_string(),
        pagamento_valor: state.number("ajuste-rp-valor"),
        fonte_recurso_tipo: state.integer("ajuste-rp-fonte"),
        valor_retificado: state.number("ajuste-rp-valor-retificado"),
    };

    if ajuste.identificacao_documento_fiscal.numero.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe o documento fiscal da retificação.".to_string(),
        });
    }

    let display = format!(
        "Retif. Pag (Doc {}): R$ {}",
        ajuste.identificacao_documento_fiscal.numero,
        ajuste.valor_retificado.map(|v| v.to_string()).unwrap_or_default()
    );
    stage_record(state, "lista-retificacao-pagamentos", &ajuste, display)?;

    state.clear_input("ajuste-rp-doc-numero");
    Ok(())
}

pub fn add_inclusao_pagamento(state: &mut FormState) -> Result<(), FormError> {
    let ajuste = InclusaoPagamento {
        identificacao_documento_fiscal: IdentificacaoDocumentoFiscal {
            numero: state.text("ajuste-ip-doc-numero").to_string(),
            identificacao_credor: IdentificacaoCredor {
                documento_tipo: state.integer("ajuste-ip-credor-tipo"),
                documento_numero: state.text("ajuste-ip-credor-numero").to_string(),
            },
        },
        pagamento_data: state.text("ajuste-ip-data").to_string(),
        pagamento_valor: state.number("ajuste-ip-valor"),
        fonte_recurso_tipo: state.integer("ajuste-ip-fonte-recurso"),
        meio_pagamento_tipo: state.integer("ajuste-ip-meio-pagamento"),
        banco: state.integer("ajuste-ip-banco"),
        agencia: state.integer("ajuste-ip-agencia"),
        conta_corrente: state.text("ajuste-ip-conta").to_string(),
        numero_transacao: state.text("ajuste-ip-transacao").to_string(),
    };

    if ajuste.identificacao_documento_fiscal.numero.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe o documento fiscal da inclusão.".to_string(),
        });
    }

    let display = format!(
        "Incl. Pag (Doc {}): R$ {}",
        ajuste.identificacao_documento_fiscal.numero,
        ajuste.pagamento_valor.map(|v| v.to_string()).unwrap_or_default()
    );
    stage_record(state, "lista-inclusao-pagamentos", &ajuste, display)?;

    state.clear_input("ajuste-ip-doc-numero");
    Ok(())
}

pub fn build_ajustes(state: &FormState) -> Result<AjustesSaldo, FormError> {
    Ok(AjustesSaldo {
        retificacao_repasses: state.records_in("lista-retificacao-repasses")?,
        inclusao_repasses: state.records_in("lista-inclusao-repasses")?,
        retificacao_pagamentos: state.records_in("lista-retificacao-pagamentos")?,
        inclusao_pagamentos: state.records_in("lista-inclusao-pagamentos")?,
    })
}

pub fn document_ajustes(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("ajustes_saldo", &build_ajustes(state)?)
}

// ============================================================================
// Discounts and treasury returns.
// ============================================================================

pub fn add_desconto(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("desc-data", "data", "Data", FieldKind::Text),
        FieldDescriptor::required("desc-descricao", "descricao", "Descrição", FieldKind::Text),
        FieldDescriptor::required("desc-valor", "valor", "Valor", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-descontos", |d| {
        format!("{} - R$ {}", field_text(d, "descricao"), field_text(d, "valor"))
    })
}

pub fn add_devolucao(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("dev-data", "data", "Data", FieldKind::Text),
        FieldDescriptor::required("dev-natureza", "natureza_devolucao_tipo", "Natureza", FieldKind::Number),
        FieldDescriptor::required("dev-valor", "valor", "Valor", FieldKind::Number),
    ];
    add_item(state, &fields, "lista-devolucoes", |d| {
        format!("Natureza {} - R$ {}", field_text(d, "natureza_devolucao_tipo"), field_text(d, "valor"))
    })
}

pub fn build_descontos(state: &FormState) -> Result<Vec<Desconto>, FormError> {
    state.records_in("lista-descontos")
}

pub fn build_devolucoes(state: &FormState) -> Result<Vec<Devolucao>, FormError> {
    state.records_in("lista-devolucoes")
}

pub fn document_descontos(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("descontos", &build_descontos(state)?)
}

pub fn document_devolucoes(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("devolucoes", &build_devolucoes(state)?)
}
