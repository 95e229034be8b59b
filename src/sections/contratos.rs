use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::stage_record;
use crate::form::state::FormState;
use crate::model::common::Credor;
use crate::model::contratos::Contrato;
use crate::sections::section_doc;

const LISTA_CONTRATOS: &str = "lista-contratos";

/// Parse the comma-separated contracting-nature codes, dropping anything
/// that is not a number.
fn parse_natureza(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .collect()
}

pub fn add_contrato(state: &mut FormState) -> Result<(), FormError> {
    let contrato = Contrato {
        numero: state.text("contrato-numero").to_string(),
        credor: Credor {
            documento_tipo: state.integer("contrato-credor-tipo"),
            documento_numero: state.text("contrato-credor-numero").to_string(),
            nome: state.text("contrato-credor-nome").to_string(),
        },
        data_assinatura: state.text("contrato-data-assinatura").to_string(),
        vigencia_tipo: state.integer("contrato-vigencia-tipo"),
        vigencia_data_inicial: state.text("contrato-vigencia-inicio").to_string(),
        vigencia_data_final: state.text("contrato-vigencia-final").to_string(),
        objeto: state.text("contrato-objeto").to_string(),
        natureza_contratacao: parse_natureza(state.text("contrato-natureza")),
        natureza_contratacao_outro: state.optional_text("contrato-natureza-outro"),
        criterio_selecao: state.integer("contrato-criterio"),
        criterio_selecao_outro: state.optional_text("contrato-criterio-outro"),
        artigo_regulamento_compras: state.text("contrato-artigo").to_string(),
        valor_montante: state.number("contrato-valor-montante"),
        valor_tipo: state.integer("contrato-valor-tipo"),
    };

    if contrato.numero.is_empty() || contrato.credor.nome.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Preencha Número e Credor.".to_string(),
        });
    }

    let display = format!("{} - {}", contrato.numero, contrato.credor.nome);
    stage_record(state, LISTA_CONTRATOS, &contrato, display)?;

    state.clear_inputs(&["contrato-numero", "contrato-credor-nome", "contrato-objeto"]);
    Ok(())
}

pub fn build(state: &FormState) -> Result<Vec<Contrato>, FormError> {
    state.records_in(LISTA_CONTRATOS)
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("contratos", &build(state)?)
}

#[cfg(test)]
mod tests {
    use super::parse_natureza;

    #[test]
    fn natureza_parses_comma_separated_codes() {
        assert_eq!(parse_natureza("1, 2,3"), vec![1, 2, 3]);
        assert_eq!(parse_natureza("1,x,3"), vec![1, 3], "non-numeric parts dropped");
        assert_eq!(parse_natureza(""), Vec::<i64>::new());
    }
}
