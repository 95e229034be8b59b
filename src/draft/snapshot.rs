use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::error::FormError;
use crate::form::list::{ListStore, StagedItem};
use crate::form::state::FormState;
use crate::form::value::FieldValue;

/// Whole-form snapshot: every input's value plus every list store's staged
/// content, the shape persisted under the single draft key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub inputs: BTreeMap<String, FieldValue>,
    pub lists: BTreeMap<String, Vec<StagedItem>>,
}

impl DraftSnapshot {
    pub fn capture(state: &FormState) -> Self {
        Self {
            inputs: state.inputs.clone(),
            lists: state
                .lists
                .iter()
                .map(|(id, list)| (id.clone(), list.items.clone()))
                .collect(),
        }
    }

    /// Merge-by-presence restore: every key present in the snapshot
    /// overwrites the live element; everything else is left untouched.
    pub fn apply(&self, state: &mut FormState) {
        for (id, value) in &self.inputs {
            state.inputs.insert(id.clone(), value.clone());
        }
        for (id, items) in &self.lists {
            state.lists.insert(
                id.clone(),
                ListStore {
                    id: id.clone(),
                    items: items.clone(),
                },
            );
        }
    }

    pub fn to_blob(&self) -> Result<String, FormError> {
        serde_json::to_string(self).map_err(|source| FormError::Serialize {
            context: "draft snapshot".to_string(),
            source,
        })
    }

    pub fn from_blob(blob: &str) -> Result<Self, FormError> {
        serde_json::from_str(blob).map_err(|source| FormError::SnapshotCorrupted { source })
    }
}

/// Content fingerprint of a serialized snapshot, for change detection.
pub fn blob_fingerprint(blob: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(blob.as_bytes());
    format!("{:x}", hasher.finalize())
}
