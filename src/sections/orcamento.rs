use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::{FieldDescriptor, FieldKind, add_item, stage_record};
use crate::form::state::FormState;
use crate::model::common::IdentificacaoEmpenho;
use crate::model::orcamento::{Empenho, Repasse};
use crate::sections::{field_text, section_doc};

const LISTA_EMPENHOS: &str = "lista-empenhos";
const LISTA_REPASSES: &str = "lista-repasses";

pub fn add_empenho(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("emp-numero", "numero", "Número", FieldKind::Text),
        FieldDescriptor::required("emp-data-emissao", "data_emissao", "Data", FieldKind::Text),
        FieldDescriptor::required("emp-classificacao", "classificacao_economica_tipo", "Classif.", FieldKind::Number),
        FieldDescriptor::required("emp-fonte-recurso", "fonte_recurso_tipo", "Fonte", FieldKind::Number),
        FieldDescriptor::required("emp-valor", "valor", "Valor", FieldKind::Number),
        FieldDescriptor::required("emp-historico", "historico", "Histórico", FieldKind::Text),
        FieldDescriptor::required("emp-cpf-ordenador", "cpf_ordenador_despesa", "CPF Ordenador", FieldKind::Text),
    ];
    add_item(state, &fields, LISTA_EMPENHOS, |d| {
        format!("Empenho {} - R$ {}", field_text(d, "numero"), field_text(d, "valor"))
    })
}

pub fn add_repasse(state: &mut FormState) -> Result<(), FormError> {
    let repasse = Repasse {
        identificacao_empenho: IdentificacaoEmpenho {
            numero: state.text("repasse-emp-numero").to_string(),
            data_emissao: state.text("repasse-emp-data").to_string(),
        },
        data_prevista: state.text("repasse-data-prevista").to_string(),
        data_repasse: state.text("repasse-data-repasse").to_string(),
        valor_previsto: state.number("repasse-valor-previsto"),
        valor_repasse: state.number("repasse-valor-repasse"),
        justificativa_diferenca_valor: state.optional_text("repasse-justificativa"),
        tipo_documento_bancario: state.integer("repasse-doc-tipo"),
        descricao_outros: state.optional_text("repasse-doc-outros"),
        numero_documento: state.text("repasse-doc-numero").to_string(),
        banco: state.integer("repasse-banco"),
        agencia: state.integer("repasse-agencia"),
        conta: state.text("repasse-conta").to_string(),
    };

    if repasse.identificacao_empenho.numero.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe o empenho do repasse.".to_string(),
        });
    }

    let display = format!(
        "Repasse Empenho {} - R$ {}",
        repasse.identificacao_empenho.numero,
        repasse.valor_repasse.map(|v| v.to_string()).unwrap_or_default()
    );
    stage_record(state, LISTA_REPASSES, &repasse, display)?;

    state.clear_input("repasse-emp-numero");
    Ok(())
}

pub fn build_empenhos(state: &FormState) -> Result<Vec<Empenho>, FormError> {
    state.records_in(LISTA_EMPENHOS)
}

pub fn build_repasses(state: &FormState) -> Result<Vec<Repasse>, FormError> {
    state.records_in(LISTA_REPASSES)
}

pub fn document_empenhos(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("empenhos", &build_empenhos(state)?)
}

pub fn document_repasses(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("repasses", &build_repasses(state)?)
}
