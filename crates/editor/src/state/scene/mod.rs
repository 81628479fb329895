//! Scene state management
//!
//! Authoritative ordered object list plus global settings, with
//! snapshot-based undo/redo history.

mod history;
mod object_ops;
mod persistence;

pub use persistence::{decode_scene_file, encode_scene_file};

use shared::{ObjectId, SceneObject, SceneSettings};

/// Full pre-mutation copy of the scene, captured by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub objects: Vec<SceneObject>,
    pub settings: SceneSettings,
}

/// History depth. When the undo stack is full, the oldest entry is evicted.
pub const MAX_UNDO_DEPTH: usize = 100;

/// Scene objects, settings, and undo/redo history.
#[derive(Default)]
pub struct SceneState {
    objects: Vec<SceneObject>,
    settings: SceneSettings,
    /// Identity of the loaded scene document, if any.
    pub(crate) scene_id: Option<String>,
    pub(crate) scene_name: Option<String>,
    /// Undo stack - pre-mutation snapshots, oldest first
    pub(crate) undo_stack: Vec<Snapshot>,
    /// Redo stack - undone states
    pub(crate) redo_stack: Vec<Snapshot>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Read-only view of the ordered object list.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Read-only view of the global scene settings.
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Get an object by id.
    pub fn get_object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub(crate) fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Capture the current state by value.
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            objects: self.objects.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Install a snapshot as the current state.
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.objects = snapshot.objects;
        self.settings = snapshot.settings;
    }

    /// Direct mutable access for mutation ops in this module tree.
    pub(crate) fn objects_mut(&mut self) -> &mut Vec<SceneObject> {
        &mut self.objects
    }

    pub(crate) fn settings_mut(&mut self) -> &mut SceneSettings {
        &mut self.settings
    }

    /// Save the pre-mutation state to the undo stack. Every mutation entry
    /// point calls this before touching objects or settings.
    pub(crate) fn save_undo(&mut self) {
        self.undo_stack.push(self.snapshot());
        if self.undo_stack.len() > MAX_UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
    }
}
