//! Error taxonomy of the editor core.
//!
//! Precondition failures (empty undo stack, empty selection, empty
//! clipboard) are deliberately not errors: those paths return `false` or
//! `None` and leave state untouched. Errors are reserved for mutations
//! addressing an unknown object and for collaborator I/O.

use shared::ObjectId;
use thiserror::Error;

use crate::import::ImportError;

#[derive(Debug, Error)]
pub enum EditorError {
    /// A mutation referenced an id absent from the scene. The UI layer
    /// treats this as a silent no-op; programmatic callers see it.
    #[error("no scene object with id {0}")]
    NotFound(ObjectId),

    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("scene document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene document I/O error: {0}")]
    Io(#[from] std::io::Error),
}
