//! Seam to the external model-loading collaborator.
//!
//! The core never parses GLTF/OBJ/FBX/STL itself. A loader implements
//! [`MeshImporter`] and hands back normalized [`ImportedAsset`] records;
//! [`crate::EditorSession::complete_import`] splices them into the scene
//! atomically at the single completion point, so no handler ever observes
//! a partially imported scene.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::{BoundingBox, Material, MeshHandle};
use thiserror::Error;

/// One mesh extracted from an imported file, already normalized by the
/// loader. Object ids are assigned by the session at splice time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedAsset {
    /// Shape name the loader recognized ("Box", "Sphere", "UnknownShape", ...).
    pub type_name: String,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
    pub bounding_box: BoundingBox,
    pub mesh: MeshHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file_name: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("import was cancelled")]
    Cancelled,

    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Failed(String),
}

/// Cooperative cancellation flag shared with an in-flight loader.
///
/// Cloning yields another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// External loader collaborator. Implementations should poll `cancel`
/// between parsing units of work and bail with [`ImportError::Cancelled`].
pub trait MeshImporter {
    fn load(
        &self,
        file_name: &str,
        bytes: &[u8],
        cancel: &CancelToken,
    ) -> Result<Vec<ImportedAsset>, ImportError>;
}
