//! Scene document save/load and autosave
//!
//! The persisted document is gzip-compressed JSON (`SceneFile`). Loading a
//! document replaces the current state outright and clears both history
//! stacks; a load is not an undoable action.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use shared::SceneFile;

use super::SceneState;
use crate::error::EditorError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

impl SceneState {
    /// Snapshot the current state as a persistable document.
    pub fn to_scene_file(&self) -> SceneFile {
        SceneFile {
            scene_id: self.scene_id.clone(),
            scene_name: self.scene_name.clone(),
            scene_settings: self.settings().clone(),
            objects: self.objects().to_vec(),
        }
    }

    /// Document id, minting a fresh one on first save of a new scene.
    pub fn assign_scene_id(&mut self) -> String {
        self.scene_id
            .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
            .clone()
    }

    /// Replace the current state with a loaded document, bypassing history.
    pub fn load_scene_file(&mut self, file: SceneFile) {
        tracing::info!(
            objects = file.objects.len(),
            scene_id = file.scene_id.as_deref().unwrap_or("<new>"),
            "load scene document"
        );
        self.scene_id = file.scene_id;
        self.scene_name = file.scene_name;
        self.restore(super::Snapshot {
            objects: file.objects,
            settings: file.scene_settings,
        });
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.version += 1;
    }

    /// Save the scene to the autosave file.
    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match encode_scene_file(&self.to_scene_file()) {
                Ok(bytes) => {
                    if let Err(e) = std::fs::write(&path, bytes) {
                        tracing::warn!("autosave failed: {e}");
                    }
                }
                Err(e) => tracing::warn!("autosave encode failed: {e}"),
            }
        }
    }

    /// Load the autosave file, if present and readable.
    pub fn load_autosave() -> Option<SceneFile> {
        let path = Self::autosave_path()?;
        let bytes = std::fs::read(&path).ok()?;
        decode_scene_file(&bytes).ok()
    }

    /// Check if the autosave file exists
    pub fn has_autosave() -> bool {
        Self::autosave_path().map(|p| p.exists()).unwrap_or(false)
    }

    fn autosave_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "artx", "artx-editor")
            .map(|dirs| dirs.data_dir().join("autosave.artx"))
    }
}

/// Encode a scene document as gzip-compressed JSON.
pub fn encode_scene_file(file: &SceneFile) -> Result<Vec<u8>, EditorError> {
    let json = serde_json::to_vec(file)?;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    Ok(encoder.finish()?)
}

/// Decode a scene document. Accepts both the compressed on-disk form and
/// plain JSON (older exports).
pub fn decode_scene_file(bytes: &[u8]) -> Result<SceneFile, EditorError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut decoder = GzDecoder::new(bytes);
        let mut json = Vec::new();
        decoder.read_to_end(&mut json)?;
        Ok(serde_json::from_slice(&json)?)
    } else {
        Ok(serde_json::from_slice(bytes)?)
    }
}
