use std::sync::Arc;

use crate::classify::model::ClassificationResult;
use crate::error::AppError;
use crate::upload::{self, CandidateFile, SelectedFile};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every user action maps to one transition method below. At most one
/// classification result is live at a time: selecting a new file or
/// resetting clears the previous result and orphans any in-flight request.
pub struct AppState {
    /// Currently selected image (None until the user picks one).
    pub file: Option<SelectedFile>,

    /// Result of the most recent completed analysis.
    pub result: Option<ClassificationResult>,

    /// User-visible error from the last selection or analysis attempt.
    pub error: Option<String>,

    /// Whether a classification request is in flight.
    pub loading: bool,

    /// Token of the most recent request. Completions carrying an older
    /// token are dropped, so a superseded request can never overwrite
    /// newer state.
    request_seq: u64,

    /// Preview URIs whose image-loader cache entry must be forgotten.
    /// Drained by the app layer, which owns the egui context.
    released_previews: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            file: None,
            result: None,
            error: None,
            loading: false,
            request_seq: 0,
            released_previews: Vec::new(),
        }
    }
}

impl AppState {
    /// Ingest a candidate file, replacing any previous selection.
    ///
    /// On validation failure the previous file and result stay exactly as
    /// they were; only the error message changes. On success the prior
    /// result, error and preview are discarded and any in-flight request
    /// is orphaned.
    pub fn select_file(&mut self, candidate: CandidateFile) {
        match upload::validate(&candidate) {
            Ok(mime) => {
                self.request_seq += 1;
                self.loading = false;
                self.release_current_preview();

                let preview_uri =
                    format!("bytes://seleccion-{}/{}", self.request_seq, candidate.name);
                self.file = Some(SelectedFile {
                    name: candidate.name,
                    bytes: Arc::from(candidate.bytes),
                    mime,
                    preview_uri,
                });
                self.result = None;
                self.error = None;
            }
            Err(err) => {
                log::warn!("Rejected selection {}: {err:?}", candidate.name);
                self.error = Some(err.to_string());
            }
        }
    }

    /// Clear file, preview, result and error back to the initial screen.
    pub fn reset(&mut self) {
        self.request_seq += 1;
        self.loading = false;
        self.release_current_preview();
        self.file = None;
        self.result = None;
        self.error = None;
    }

    /// Start one analysis. Returns the file to send plus the token its
    /// completion must present. `None` (a no-op) when nothing is selected
    /// or a request is already in flight.
    pub fn begin_analysis(&mut self) -> Option<(SelectedFile, u64)> {
        if self.loading {
            return None;
        }
        let file = self.file.clone()?;

        self.request_seq += 1;
        self.loading = true;
        self.error = None;

        Some((file, self.request_seq))
    }

    /// Apply a completed analysis. A stale completion (token mismatch,
    /// meaning the request was superseded by a newer selection, reset or
    /// analysis) is dropped without touching anything.
    pub fn finish_analysis(
        &mut self,
        token: u64,
        outcome: Result<ClassificationResult, AppError>,
    ) {
        if token != self.request_seq {
            log::debug!(
                "Dropping stale completion (token {token}, current {})",
                self.request_seq
            );
            return;
        }

        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Drain the preview URIs the app layer must forget from the image
    /// loader cache.
    pub fn take_released_previews(&mut self) -> Vec<String> {
        std::mem::take(&mut self.released_previews)
    }

    fn release_current_preview(&mut self) {
        if let Some(prev) = self.file.take() {
            self.released_previews.push(prev.preview_uri);
        }
    }
}
