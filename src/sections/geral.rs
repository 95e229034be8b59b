use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::state::FormState;
use crate::model::cadastro::Descritor;

/// Header page: the document descriptor plus the adjustment code.
pub fn build_descritor(state: &FormState) -> Descritor {
    Descritor {
        tipo_documento: state.text("tipo_documento").to_string(),
        municipio: state.integer("municipio"),
        entidade: state.integer("entidade"),
        ano: state.integer("ano"),
        mes: state.integer("mes"),
    }
}

pub fn build_codigo_ajuste(state: &FormState) -> String {
    state.text("codigo_ajuste").to_string()
}

/// Standalone document: both header keys side by side.
pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    let descritor = serde_json::to_value(build_descritor(state)).map_err(|source| {
        FormError::Serialize {
            context: "section 'descritor'".to_string(),
            source,
        }
    })?;

    let mut map = Map::new();
    map.insert("descritor".to_string(), descritor);
    map.insert(
        "codigo_ajuste".to_string(),
        Value::String(build_codigo_ajuste(state)),
    );
    Ok(map)
}
