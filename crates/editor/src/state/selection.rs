//! Object selection state (supports multi-select)
//!
//! Holds ids only; the invariant that every selected id exists in the
//! scene is maintained by calling [`SelectionState::retain_existing`]
//! after every delete and undo/redo. The camera-orbit side effect of
//! selecting is raised by the session, not here.

use shared::{ObjectId, SceneObject};

#[derive(Default)]
pub struct SelectionState {
    /// Selected object ids (in order of selection)
    selected: Vec<ObjectId>,
}

impl SelectionState {
    /// Primary (first) selected object
    pub fn primary(&self) -> Option<ObjectId> {
        self.selected.first().copied()
    }

    /// All selected ids, in selection order
    pub fn all(&self) -> &[ObjectId] {
        &self.selected
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Replace the selection wholesale ("click selects exactly this").
    /// An empty list deselects everything.
    pub fn select(&mut self, ids: Vec<ObjectId>) {
        self.selected = ids;
        self.dedup();
    }

    /// Toggle one id (Ctrl+click behavior)
    pub fn toggle(&mut self, id: ObjectId) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Clear all selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop ids that no longer exist in the scene, preserving order.
    pub fn retain_existing(&mut self, objects: &[SceneObject]) {
        self.selected
            .retain(|id| objects.iter().any(|o| o.id == *id));
    }

    fn dedup(&mut self) {
        let mut seen = Vec::with_capacity(self.selected.len());
        self.selected.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use shared::{SceneObject, ShapeKind};

    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.primary().is_none());
        assert!(s.all().is_empty());
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn test_select_replaces_wholesale() {
        let mut s = SelectionState::default();
        s.select(vec![1, 2]);
        s.select(vec![3]);
        assert_eq!(s.all(), &[3]);
        assert!(!s.is_selected(1));
    }

    #[test]
    fn test_select_empty_deselects_all() {
        let mut s = SelectionState::default();
        s.select(vec![1, 2]);
        s.select(Vec::new());
        assert!(s.is_empty());
    }

    #[test]
    fn test_select_drops_duplicates() {
        let mut s = SelectionState::default();
        s.select(vec![1, 2, 1, 3, 2]);
        assert_eq!(s.all(), &[1, 2, 3]);
    }

    #[test]
    fn test_toggle_add_and_remove() {
        let mut s = SelectionState::default();
        s.select(vec![1]);
        s.toggle(2);
        assert_eq!(s.count(), 2);
        s.toggle(1);
        assert_eq!(s.all(), &[2]);
    }

    #[test]
    fn test_primary_returns_first() {
        let mut s = SelectionState::default();
        s.select(vec![5, 7, 9]);
        assert_eq!(s.primary(), Some(5));
    }

    #[test]
    fn test_retain_existing_filters_dead_ids() {
        let mut s = SelectionState::default();
        s.select(vec![1, 2, 3]);

        let objects = vec![
            SceneObject::shape(1, ShapeKind::Cube),
            SceneObject::shape(3, ShapeKind::Sphere),
        ];
        s.retain_existing(&objects);
        assert_eq!(s.all(), &[1, 3]);

        s.retain_existing(&[]);
        assert!(s.is_empty());
    }
}
