use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::RecordMap;

pub mod atividades;
pub mod bens;
pub mod certidoes;
pub mod contratos;
pub mod declaracoes;
pub mod empregados;
pub mod financeiro;
pub mod fiscal;
pub mod geral;
pub mod orcamento;
pub mod parecer;
pub mod pessoal;
pub mod publicacoes;
pub mod relatorios;
pub mod transparencia;

/// Wrap a section payload under its document key, producing the standalone
/// per-section document (the same object the full document merges in).
pub(crate) fn section_doc<T: serde::Serialize>(
    key: &str,
    payload: &T,
) -> Result<Map<String, Value>, FormError> {
    let value = serde_json::to_value(payload).map_err(|source| FormError::Serialize {
        context: format!("section '{}'", key),
        source,
    })?;

    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Ok(map)
}

/// Render one record field for a display line; absent keys render empty.
pub(crate) fn field_text(record: &RecordMap, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
