use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormError;

/// Payload carried by one staged item.
///
/// Bare strings (a CPF, a URL) are staged as `Scalar`; everything else is a
/// `Record` serialized at add time. The record is the source of truth; the
/// display line is derived once and never parsed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StagedValue {
    Scalar(String),
    Record(Value),
}

/// One entry in a list store: the serialized record plus its display line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedItem {
    pub display: String,
    #[serde(flatten)]
    pub value: StagedValue,
}

impl StagedItem {
    pub fn record(value: Value, display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: StagedValue::Record(value),
        }
    }

    pub fn scalar(text: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: StagedValue::Scalar(text.into()),
        }
    }
}

/// Ordered sequence of staged items under one named container.
///
/// Insertion order is display order is serialization order. Removal detaches
/// exactly one item; the rest keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListStore {
    pub id: String,
    pub items: Vec<StagedItem>,
}

impl ListStore {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: StagedItem) {
        self.items.push(item);
    }

    /// Detach the item at `index`. Out-of-range removals are ignored, like
    /// clicking remove on a node that is already gone.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Bulk clear: the staging buffer is scoped to the record currently
    /// being composed, so absorbing it into a parent empties it.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-all as raw JSON values, in order. Scalars become JSON strings.
    pub fn values(&self) -> Vec<Value> {
        self.items
            .iter()
            .map(|item| match &item.value {
                StagedValue::Scalar(s) => Value::String(s.clone()),
                StagedValue::Record(v) => v.clone(),
            })
            .collect()
    }

    /// Read-all parsed into the section's record type, in order.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>, FormError> {
        self.items
            .iter()
            .map(|item| match &item.value {
                StagedValue::Record(v) => {
                    serde_json::from_value(v.clone()).map_err(|source| FormError::InvalidRecord {
                        container: self.id.clone(),
                        source,
                    })
                }
                StagedValue::Scalar(s) => {
                    serde_json::from_value(Value::String(s.clone())).map_err(|source| {
                        FormError::InvalidRecord {
                            container: self.id.clone(),
                            source,
                        }
                    })
                }
            })
            .collect()
    }

    /// Read-all for scalar-only containers (bare CPFs, URLs).
    pub fn scalars(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| match &item.value {
                StagedValue::Scalar(s) => Some(s.clone()),
                StagedValue::Record(_) => None,
            })
            .collect()
    }
}
