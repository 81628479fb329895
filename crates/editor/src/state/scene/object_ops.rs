//! Object CRUD operations
//!
//! Every mutation snapshots the pre-image first and clears the redo stack,
//! so each call produces exactly one undo step. Operations that would
//! change nothing return early without touching history.

use shared::{ObjectId, SceneObject, SceneObjectPatch, SceneSettingsPatch};

use super::SceneState;
use crate::error::EditorError;

impl SceneState {
    /// Append a new object. Id uniqueness is the caller's contract.
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        self.save_undo();
        self.redo_stack.clear();

        let id = object.id;
        tracing::debug!(id, kind = object.kind.tag(), "add object");
        self.objects_mut().push(object);

        self.version += 1;
        id
    }

    /// Append a batch of objects as a single undo step (paste, import).
    /// Empty batches leave state and history untouched.
    pub fn insert_objects(&mut self, objects: Vec<SceneObject>) -> usize {
        if objects.is_empty() {
            return 0;
        }

        self.save_undo();
        self.redo_stack.clear();

        let count = objects.len();
        tracing::debug!(count, "insert objects");
        self.objects_mut().extend(objects);

        self.version += 1;
        count
    }

    /// Remove every object whose id is in `ids`. Ids absent from the scene
    /// are ignored; if nothing matches, no undo entry is recorded.
    pub fn remove_objects(&mut self, ids: &[ObjectId]) -> usize {
        let matching = self
            .objects()
            .iter()
            .filter(|o| ids.contains(&o.id))
            .count();
        if matching == 0 {
            return 0;
        }

        self.save_undo();
        self.redo_stack.clear();

        tracing::debug!(count = matching, "remove objects");
        self.objects_mut().retain(|o| !ids.contains(&o.id));

        self.version += 1;
        matching
    }

    /// Shallow-merge a partial edit into one object. The nested material
    /// merge keeps unspecified material fields intact.
    pub fn update_object(
        &mut self,
        id: ObjectId,
        patch: &SceneObjectPatch,
    ) -> Result<(), EditorError> {
        if !self.contains(id) {
            return Err(EditorError::NotFound(id));
        }

        self.save_undo();
        self.redo_stack.clear();

        if let Some(object) = self.get_object_mut(id) {
            object.apply(patch);
        }

        self.version += 1;
        Ok(())
    }

    /// Shallow-merge a partial edit into the global scene settings.
    pub fn update_settings(&mut self, patch: &SceneSettingsPatch) {
        self.save_undo();
        self.redo_stack.clear();

        self.settings_mut().merge(patch);
        self.version += 1;
    }

    /// Apply an arbitrary edit to every matching object as one undo step
    /// (property paste). Returns how many objects were touched.
    pub fn modify_objects(
        &mut self,
        ids: &[ObjectId],
        mut edit: impl FnMut(&mut SceneObject),
    ) -> usize {
        let matching = self
            .objects()
            .iter()
            .filter(|o| ids.contains(&o.id))
            .count();
        if matching == 0 {
            return 0;
        }

        self.save_undo();
        self.redo_stack.clear();

        for object in self.objects_mut().iter_mut() {
            if ids.contains(&object.id) {
                edit(object);
            }
        }

        self.version += 1;
        matching
    }

    /// Translate every matching object by `delta` as one undo step.
    pub fn translate_objects(&mut self, ids: &[ObjectId], delta: [f64; 3]) -> usize {
        let matching = self
            .objects()
            .iter()
            .filter(|o| ids.contains(&o.id))
            .count();
        if matching == 0 {
            return 0;
        }

        self.save_undo();
        self.redo_stack.clear();

        for object in self.objects_mut().iter_mut() {
            if ids.contains(&object.id) {
                object.position[0] += delta[0];
                object.position[1] += delta[1];
                object.position[2] += delta[2];
            }
        }

        self.version += 1;
        matching
    }
}
