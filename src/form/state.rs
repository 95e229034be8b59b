use std::collections::BTreeMap;

use crate::error::FormError;
use crate::form::list::ListStore;
use crate::form::value::FieldValue;

/// The whole form, as an explicit value: every input's current content plus
/// every list store, keyed by element id. Replaces the original's implicit
/// DOM-as-database so collectors, assemblers and the draft store can run
/// against it directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub inputs: BTreeMap<String, FieldValue>,
    pub lists: BTreeMap<String, ListStore>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.inputs
            .insert(id.into(), FieldValue::Text(value.into()));
    }

    pub fn set_bool(&mut self, id: impl Into<String>, value: bool) {
        self.inputs.insert(id.into(), FieldValue::Bool(value));
    }

    /// Raw text of an input; missing ids read as empty, like elements the
    /// page does not have.
    pub fn text(&self, id: &str) -> &str {
        self.inputs.get(id).map(FieldValue::as_text).unwrap_or("")
    }

    /// Text with empty-means-null semantics.
    pub fn optional_text(&self, id: &str) -> Option<String> {
        let text = self.text(id);
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Strict float parse; empty or non-numeric reads as null.
    pub fn number(&self, id: &str) -> Option<f64> {
        self.text(id).trim().parse::<f64>().ok()
    }

    /// Integer read for code-like fields (month, bank, type selectors).
    pub fn integer(&self, id: &str) -> Option<i64> {
        self.number(id).map(|n| n.trunc() as i64)
    }

    /// Boolean read, normalized at the boundary; unset reads as false.
    pub fn flag(&self, id: &str) -> bool {
        self.inputs.get(id).map(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn clear_input(&mut self, id: &str) {
        if let Some(value) = self.inputs.get_mut(id) {
            *value = FieldValue::Text(String::new());
        }
    }

    pub fn clear_inputs(&mut self, ids: &[&str]) {
        for id in ids {
            self.clear_input(id);
        }
    }

    /// The list store under `id`, created empty on first use.
    pub fn list_mut(&mut self, id: &str) -> &mut ListStore {
        self.lists
            .entry(id.to_string())
            .or_insert_with(|| ListStore::new(id))
    }

    pub fn list(&self, id: &str) -> Option<&ListStore> {
        self.lists.get(id)
    }

    pub fn list_len(&self, id: &str) -> usize {
        self.lists.get(id).map(ListStore::len).unwrap_or(0)
    }

    /// Read-all of a container parsed into the section's record type;
    /// unknown containers read as empty lists.
    pub fn records_in<T: serde::de::DeserializeOwned>(
        &self,
        id: &str,
    ) -> Result<Vec<T>, FormError> {
        match self.lists.get(id) {
            Some(list) => list.records(),
            None => Ok(Vec::new()),
        }
    }

    /// Read-all of a scalar-only container (bare CPFs, URLs).
    pub fn scalars_in(&self, id: &str) -> Vec<String> {
        self.lists.get(id).map(ListStore::scalars).unwrap_or_default()
    }

    pub fn clear_list(&mut self, id: &str) {
        if let Some(list) = self.lists.get_mut(id) {
            list.clear();
        }
    }
}
