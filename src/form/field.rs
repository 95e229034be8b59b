use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::list::StagedItem;
use crate::form::state::FormState;
use crate::form::value::number_value;

pub type RecordMap = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Text,
}

/// Mapping of one form input into a record key. Declared statically per
/// call site; never persisted.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub source_id: String,
    pub output_key: String,
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn required(source_id: &str, output_key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            source_id: source_id.to_string(),
            output_key: output_key.to_string(),
            label: label.to_string(),
            required: true,
            kind,
        }
    }

    pub fn optional(source_id: &str, output_key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            source_id: source_id.to_string(),
            output_key: output_key.to_string(),
            label: label.to_string(),
            required: false,
            kind,
        }
    }
}

/// Resolve every descriptor against the form and build a flat record.
///
/// Number fields parse as floats (non-numeric reads as null), text fields
/// treat empty as null. The first required field that resolves to null
/// aborts the whole collection; optional nulls are omitted from the record.
pub fn collect_record(
    state: &FormState,
    fields: &[FieldDescriptor],
) -> Result<RecordMap, FormError> {
    let mut record = RecordMap::new();

    for field in fields {
        let value = match field.kind {
            FieldKind::Number => state.number(&field.source_id).map(number_value),
            FieldKind::Text => state.optional_text(&field.source_id).map(Value::String),
        };

        match value {
            Some(v) => {
                record.insert(field.output_key.clone(), v);
            }
            None if field.required => {
                return Err(FormError::MissingRequired {
                    label: field.label.clone(),
                });
            }
            None => {}
        }
    }

    Ok(record)
}

/// Collect a record, stage it into `container` with a caller-supplied
/// display line, then clear the source inputs back to empty.
pub fn add_item<F>(
    state: &mut FormState,
    fields: &[FieldDescriptor],
    container: &str,
    display: F,
) -> Result<(), FormError>
where
    F: Fn(&RecordMap) -> String,
{
    let record = collect_record(state, fields)?;
    let line = display(&record);

    state
        .list_mut(container)
        .push(StagedItem::record(Value::Object(record), line));

    for field in fields {
        state.clear_input(&field.source_id);
    }
    Ok(())
}

/// String-item variant: stage the raw input text (a bare CPF, a URL)
/// without JSON-encoding it.
pub fn add_scalar<F>(
    state: &mut FormState,
    input_id: &str,
    container: &str,
    display: F,
) -> Result<(), FormError>
where
    F: Fn(&str) -> String,
{
    let value = match state.optional_text(input_id) {
        Some(v) => v,
        None => {
            return Err(FormError::IncompleteRecord {
                message: "Preencha o campo.".to_string(),
            });
        }
    };

    let line = display(&value);
    state
        .list_mut(container)
        .push(StagedItem::scalar(value, line));
    state.clear_input(input_id);
    Ok(())
}

/// Stage an already-built section record (the bespoke-builder protocol:
/// build by hand, then stage and clear like the generic path).
pub fn stage_record<T: serde::Serialize>(
    state: &mut FormState,
    container: &str,
    record: &T,
    display: impl Into<String>,
) -> Result<(), FormError> {
    let value = serde_json::to_value(record).map_err(|source| FormError::Serialize {
        context: format!("staging into '{}'", container),
        source,
    })?;

    state
        .list_mut(container)
        .push(StagedItem::record(value, display));
    Ok(())
}
