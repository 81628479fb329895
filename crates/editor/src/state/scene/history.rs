//! Undo/redo functionality

use super::SceneState;

impl SceneState {
    /// Undo last change. No-op at the stack boundary.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(prev) => {
                self.redo_stack.push(self.snapshot());
                self.restore(prev);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Redo last undone change. No-op at the stack boundary.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                self.undo_stack.push(self.snapshot());
                self.restore(next);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use shared::{SceneSettingsPatch, ShapeKind};

    use crate::state::scene::{SceneState, MAX_UNDO_DEPTH};
    use shared::SceneObject;

    fn add_cube(scene: &mut SceneState, id: u64) {
        scene.add_object(SceneObject::shape(id, ShapeKind::Cube));
    }

    #[test]
    fn test_undo_at_empty_stack_is_noop() {
        let mut scene = SceneState::default();
        assert!(!scene.undo());
        assert!(!scene.redo());
        assert_eq!(scene.version(), 0);
    }

    #[test]
    fn test_undo_reverts_last_action() {
        let mut scene = SceneState::default();
        add_cube(&mut scene, 1);
        add_cube(&mut scene, 2);

        assert!(scene.undo());
        assert_eq!(scene.object_count(), 1);
        assert!(scene.contains(1));

        assert!(scene.undo());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_redo_replays_undone_action() {
        let mut scene = SceneState::default();
        add_cube(&mut scene, 1);
        scene.undo();

        assert!(scene.redo());
        assert_eq!(scene.object_count(), 1);
        assert!(!scene.can_redo());
    }

    #[test]
    fn test_new_mutation_clears_redo_stack() {
        let mut scene = SceneState::default();
        add_cube(&mut scene, 1);
        scene.undo();
        assert!(scene.can_redo());

        add_cube(&mut scene, 2);
        assert!(!scene.can_redo());
        assert!(!scene.redo());
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn test_settings_restored_by_undo() {
        let mut scene = SceneState::default();
        scene.update_settings(&SceneSettingsPatch {
            background_color: Some("#101010".to_string()),
            ..SceneSettingsPatch::default()
        });
        assert_eq!(scene.settings().background_color, "#101010");

        scene.undo();
        assert_eq!(scene.settings().background_color, "#2D2E32");

        scene.redo();
        assert_eq!(scene.settings().background_color, "#101010");
    }

    #[test]
    fn test_undo_stack_evicts_oldest_beyond_cap() {
        let mut scene = SceneState::default();
        for id in 0..(MAX_UNDO_DEPTH as u64 + 20) {
            add_cube(&mut scene, id);
        }
        assert_eq!(scene.undo_depth(), MAX_UNDO_DEPTH);

        let mut undone = 0;
        while scene.undo() {
            undone += 1;
        }
        assert_eq!(undone, MAX_UNDO_DEPTH);
        // The 20 oldest additions were evicted and can no longer be undone
        assert_eq!(scene.object_count(), 20);
    }
}
