//! Incremental composition of a municipal accountability report.
//!
//! The form lives in an explicit [`form::state::FormState`]: inputs keyed by
//! element id plus named list stores of staged records. Sections stage typed
//! records through the generic collector or their bespoke builders, the
//! assembler turns the state into the fixed external JSON schema (per
//! section or the whole report at once), and the draft store snapshots the
//! entire form behind a pluggable storage port.

pub mod assemble;
pub mod cli;
pub mod draft;
pub mod error;
pub mod form;
pub mod model;
pub mod sections;
pub mod trace;

pub use error::FormError;
pub use form::field::{FieldDescriptor, FieldKind};
pub use form::list::{ListStore, StagedItem, StagedValue};
pub use form::state::FormState;
