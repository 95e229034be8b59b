use crate::draft::snapshot::{DraftSnapshot, blob_fingerprint};
use crate::draft::storage::DraftStorage;
use crate::error::FormError;
use crate::form::state::FormState;
use crate::trace::event::TraceEvent;
use crate::trace::logger::TraceLogger;

/// Save/restore/clear of the one draft blob, plus the periodic autosave.
///
/// Exactly one snapshot exists at a time; every save replaces the whole
/// blob. Restore confirmation is the calling layer's job.
pub struct DraftStore<S: DraftStorage> {
    storage: S,
    last_fingerprint: Option<String>,
}

impl<S: DraftStorage> DraftStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            last_fingerprint: None,
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self.storage.load(), Ok(Some(_)))
    }

    /// Snapshot the whole form and replace the stored blob. Failures are
    /// reported to the caller and never retried.
    pub fn save(&mut self, state: &FormState, tracer: &TraceLogger) -> Result<(), FormError> {
        let blob = DraftSnapshot::capture(state).to_blob()?;
        let fingerprint = blob_fingerprint(&blob);

        self.storage.save(&blob)?;
        tracer.log(&TraceEvent::now("draft_saved").with_fingerprint(&fingerprint));
        self.last_fingerprint = Some(fingerprint);
        Ok(())
    }

    /// Apply the stored snapshot onto the live form (merge-by-presence).
    /// Returns false when no draft exists; a corrupted blob leaves the form
    /// untouched.
    pub fn restore(&self, state: &mut FormState, tracer: &TraceLogger) -> Result<bool, FormError> {
        let Some(blob) = self.storage.load()? else {
            return Ok(false);
        };

        let snapshot = DraftSnapshot::from_blob(&blob)?;
        snapshot.apply(state);
        tracer.log(&TraceEvent::now("draft_restored").with_fingerprint(blob_fingerprint(&blob)));
        Ok(true)
    }

    pub fn clear(&mut self, tracer: &TraceLogger) -> Result<(), FormError> {
        self.storage.clear()?;
        self.last_fingerprint = None;
        tracer.log(&TraceEvent::now("draft_cleared"));
        Ok(())
    }

    /// Periodic re-save: only runs when a draft already exists, so an
    /// unintended empty form never overwrites "no draft". Fire-and-forget;
    /// failures go silently to the trace log.
    pub fn autosave_tick(&mut self, state: &FormState, tracer: &TraceLogger) {
        match self.storage.load() {
            Ok(Some(_)) => {}
            Ok(None) => return,
            Err(e) => {
                tracer.log(&TraceEvent::now("autosave_failed").with_detail(e.to_string()));
                return;
            }
        }

        let blob = match DraftSnapshot::capture(state).to_blob() {
            Ok(b) => b,
            Err(e) => {
                tracer.log(&TraceEvent::now("autosave_failed").with_detail(e.to_string()));
                return;
            }
        };

        let fingerprint = blob_fingerprint(&blob);
        if self.last_fingerprint.as_deref() == Some(fingerprint.as_str()) {
            tracer.log(&TraceEvent::now("autosave_skipped").with_fingerprint(&fingerprint));
            return;
        }

        match self.storage.save(&blob) {
            Ok(()) => {
                tracer.log(&TraceEvent::now("autosave").with_fingerprint(&fingerprint));
                self.last_fingerprint = Some(fingerprint);
            }
            Err(e) => {
                tracer.log(&TraceEvent::now("autosave_failed").with_detail(e.to_string()));
            }
        }
    }
}
