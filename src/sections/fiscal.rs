use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::stage_record;
use crate::form::state::FormState;
use crate::model::common::{Credor, IdentificacaoContrato, IdentificacaoCredor, IdentificacaoDocumentoFiscal};
use crate::model::fiscal::{DocumentoFiscal, Glosa, Pagamento};
use crate::sections::section_doc;

const LISTA_DOCS: &str = "lista-docfiscais";
const LISTA_PAGAMENTOS: &str = "lista-pagamentos";
const LISTA_GLOSAS: &str = "lista-glosas";

// ============================================================================
// Expense execution pages: fiscal documents, payments, glosas.
// ============================================================================

pub fn add_documento_fiscal(state: &mut FormState) -> Result<(), FormError> {
    let Some(valor_bruto) = state.number("doc-valor-bruto") else {
        return Err(FormError::IncompleteRecord {
            message: "Preencha Número e Valor Bruto".to_string(),
        });
    };

    let doc = DocumentoFiscal {
        numero: state.text("doc-numero").to_string(),
        data_emissao: state.text("doc-data-emissao").to_string(),
        descricao: state.text("doc-descricao").to_string(),
        credor: Credor {
            documento_tipo: state.integer("doc-credor-tipo"),
            documento_numero: state.text("doc-credor-numero").to_string(),
            nome: state.text("doc-credor-nome").to_string(),
        },
        identificacao_contrato: IdentificacaoContrato {
            numero: state.text("doc-contrato-numero").to_string(),
            data_assinatura: state.text("doc-contrato-data").to_string(),
            identificacao_credor: IdentificacaoCredor {
                documento_tipo: state.integer("doc-contrato-credor-tipo"),
                documento_numero: state.text("doc-contrato-credor-numero").to_string(),
            },
        },
        valor_bruto,
        valor_encargos: state.number("doc-valor-encargos"),
        categoria_despesas_tipo: state.integer("doc-categoria-despesa"),
        rateio_proveniente_tipo: state.integer("doc-rateio-tipo"),
        rateio_percentual: state.number("doc-rateio-percentual"),
    };

    if doc.numero.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Preencha Número e Valor Bruto".to_string(),
        });
    }

    let display = format!("Doc: {} (R$ {})", doc.numero, doc.valor_bruto);
    stage_record(state, LISTA_DOCS, &doc, display)?;

    state.clear_inputs(&["doc-numero", "doc-valor-bruto"]);
    Ok(())
}

pub fn add_pagamento(state: &mut FormState) -> Result<(), FormError> {
    let Some(valor) = state.number("pag-valor") else {
        return Err(FormError::IncompleteRecord {
            message: "Dados incompletos.".to_string(),
        });
    };

    let pagamento = Pagamento {
        identificacao_documento_fiscal: IdentificacaoDocumentoFiscal {
            numero: state.text("pag-doc-numero").to_string(),
            identificacao_credor: IdentificacaoCredor {
                documento_tipo: state.integer("pag-doc-credor-tipo"),
                documento_numero: state.text("pag-doc-credor-numero").to_string(),
            },
        },
        pagamento_data: state.text("pag-data").to_string(),
        pagamento_valor: valor,
        fonte_recurso_tipo: state.integer("pag-fonte-recurso"),
        meio_pagamento_tipo: state.integer("pag-meio-pagamento"),
        banco: state.integer("pag-banco"),
        agencia: state.integer("pag-agencia"),
        conta_corrente: state.text("pag-conta").to_string(),
        numero_transacao: state.text("pag-transacao").to_string(),
    };

    if pagamento.identificacao_documento_fiscal.numero.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Dados incompletos.".to_string(),
        });
    }

    let display = format!(
        "Ref. Doc: {} - R$ {}",
        pagamento.identificacao_documento_fiscal.numero, pagamento.pagamento_valor
    );
    stage_record(state, LISTA_PAGAMENTOS, &pagamento, display)?;

    state.clear_input("pag-valor");
    Ok(())
}

pub fn add_glosa(state: &mut FormState) -> Result<(), FormError> {
    let glosa = Glosa {
        identificacao_documento_fiscal: IdentificacaoDocumentoFiscal {
            numero: state.text("glosa-doc-numero").to_string(),
            identificacao_credor: IdentificacaoCredor {
                documento_tipo: state.integer("glosa-credor-tipo"),
                documento_numero: state.text("glosa-credor-numero").to_string(),
            },
        },
        resultado_analise: state.integer("glosa-resultado"),
        valor_glosa: state.number("glosa-valor"),
    };

    if glosa.identificacao_documento_fiscal.numero.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe o documento fiscal da glosa.".to_string(),
        });
    }

    let display = format!(
        "Glosa Doc {} - R$ {}",
        glosa.identificacao_documento_fiscal.numero,
        glosa.valor_glosa.map(|v| v.to_string()).unwrap_or_default()
    );
    stage_record(state, LISTA_GLOSAS, &glosa, display)?;

    state.clear_input("glosa-doc-numero");
    Ok(())
}

pub fn build_documentos(state: &FormState) -> Result<Vec<DocumentoFiscal>, FormError> {
    state.records_in(LISTA_DOCS)
}

pub fn build_pagamentos(state: &FormState) -> Result<Vec<Pagamento>, FormError> {
    state.records_in(LISTA_PAGAMENTOS)
}

pub fn build_glosas(state: &FormState) -> Result<Vec<Glosa>, FormError> {
    state.records_in(LISTA_GLOSAS)
}

pub fn document_documentos(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("documentos_fiscais", &build_documentos(state)?)
}

pub fn document_pagamentos(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("pagamentos", &build_pagamentos(state)?)
}

pub fn document_glosas(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("glosas", &build_glosas(state)?)
}
