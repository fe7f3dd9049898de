// Fatal error taxonomy for the analysis pipeline.
//
// Only the two classes that abort a run live here; soft absences (a concept
// without an embedding, a feature outside the eligibility window) are
// represented as Option/None at the call sites, never as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required input file is absent and there is no fallback —
    /// e.g. no embedding cache AND no raw corpus.
    #[error("resource not found: {} ({detail})", .path.display())]
    ResourceNotFound { path: PathBuf, detail: String },

    /// Persisted or input state is internally inconsistent — mismatched
    /// cache lengths, a taxonomy row with too few columns. Never recovered
    /// from because it indicates corrupted data, not a transient condition.
    #[error("data integrity error: {0}")]
    Integrity(String),
}

impl PipelineError {
    pub fn not_found(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
