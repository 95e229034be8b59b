use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::{FieldDescriptor, FieldKind, add_item};
use crate::form::state::FormState;
use crate::model::patrimonio::RelacaoBens;
use crate::sections::{field_text, section_doc};

// ============================================================================
// Asset movements page: six independent lists, all staged through the
// generic collector.
// ============================================================================

pub fn add_bem_movel_adquirido(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("bma-patrimonio", "numero_patrimonio", "Nº Patrimônio", FieldKind::Text),
        FieldDescriptor::required("bma-data", "data_aquisicao", "Data", FieldKind::Text),
        FieldDescriptor::required("bma-valor", "valor_aquisicao", "Valor", FieldKind::Number),
        FieldDescriptor::required("bma-descricao", "descricao", "Descrição", FieldKind::Text),
    ];
    add_item(state, &fields, "lista-bens-moveis-adquiridos", |d| {
        format!("Patr: {} - {}", field_text(d, "numero_patrimonio"), field_text(d, "descricao"))
    })
}

pub fn add_bem_movel_cedido(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("bmc-patrimonio", "numero_patrimonio", "Nº Patrimônio", FieldKind::Text),
        FieldDescriptor::required("bmc-data", "data_cessao", "Data", FieldKind::Text),
        FieldDescriptor::required("bmc-valor", "valor_cessao", "Valor", FieldKind::Number),
        FieldDescriptor::required("bmc-descricao", "descricao", "Descrição", FieldKind::Text),
    ];
    add_item(state, &fields, "lista-bens-moveis-cedidos", |d| {
        format!("Patr: {} - {}", field_text(d, "numero_patrimonio"), field_text(d, "descricao"))
    })
}

pub fn add_bem_movel_baixado(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("bmb-patrimonio", "numero_patrimonio", "Nº Patrimônio", FieldKind::Text),
        FieldDescriptor::required("bmb-data", "data_baixa_devolucao", "Data", FieldKind::Text),
    ];
    add_item(state, &fields, "lista-bens-moveis-baixados", |d| {
        format!("Patr: {} (Baixa: {})", field_text(d, "numero_patrimonio"), field_text(d, "data_baixa_devolucao"))
    })
}

pub fn add_bem_imovel_adquirido(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("bia-descricao", "descricao", "Descrição", FieldKind::Text),
        FieldDescriptor::required("bia-data", "data_aquisicao", "Data", FieldKind::Text),
    ];
    add_item(state, &fields, "lista-bens-imoveis-adquiridos", |d| {
        format!("{} ({})", field_text(d, "descricao"), field_text(d, "data_aquisicao"))
    })
}

pub fn add_bem_imovel_cedido(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("bic-descricao", "descricao", "Descrição", FieldKind::Text),
        FieldDescriptor::required("bic-data", "data_cessao", "Data", FieldKind::Text),
    ];
    add_item(state, &fields, "lista-bens-imoveis-cedidos", |d| {
        format!("{} ({})", field_text(d, "descricao"), field_text(d, "data_cessao"))
    })
}

pub fn add_bem_imovel_baixado(state: &mut FormState) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required("bib-descricao", "descricao", "Descrição", FieldKind::Text),
        FieldDescriptor::required("bib-data", "data_baixa_devolucao", "Data", FieldKind::Text),
    ];
    add_item(state, &fields, "lista-bens-imoveis-baixados", |d| {
        format!("{} ({})", field_text(d, "descricao"), field_text(d, "data_baixa_devolucao"))
    })
}

pub fn build(state: &FormState) -> Result<RelacaoBens, FormError> {
    Ok(RelacaoBens {
        relacao_bens_moveis_adquiridos: state.records_in("lista-bens-moveis-adquiridos")?,
        relacao_bens_moveis_cedidos: state.records_in("lista-bens-moveis-cedidos")?,
        relacao_bens_moveis_baixados_devolvidos: state.records_in("lista-bens-moveis-baixados")?,
        relacao_bens_imoveis_adquiridos: state.records_in("lista-bens-imoveis-adquiridos")?,
        relacao_bens_imoveis_cedidos: state.records_in("lista-bens-imoveis-cedidos")?,
        relacao_bens_imoveis_baixados_devolvidos: state.records_in("lista-bens-imoveis-baixados")?,
    })
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("relacao_bens", &build(state)?)
}
