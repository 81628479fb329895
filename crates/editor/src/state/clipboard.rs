//! Session-scoped clipboards
//!
//! Two buffers: whole-object copies for Ctrl+C/Ctrl+V, and a single-object
//! property snapshot (transform + material) for paste-onto-many. Both hold
//! deep copies taken at copy time; later scene edits do not leak in.

use shared::{Material, SceneObject};

/// Transform + material captured from one object, applied to many.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySnapshot {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
    pub material: Option<Material>,
}

impl PropertySnapshot {
    pub fn of(object: &SceneObject) -> Self {
        Self {
            position: object.position,
            rotation: object.rotation,
            scale: object.scale,
            material: object.material.clone(),
        }
    }
}

#[derive(Default)]
pub struct ClipboardState {
    objects: Vec<SceneObject>,
    properties: Option<PropertySnapshot>,
}

impl ClipboardState {
    /// Deep-copy the given objects into the buffer, replacing its previous
    /// contents unconditionally. Copying with nothing selected empties the
    /// buffer, so a later paste is a no-op.
    pub fn copy_objects(&mut self, objects: Vec<SceneObject>) -> usize {
        self.objects = objects;
        self.objects.len()
    }

    /// Buffered copies, in copy order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn copy_properties(&mut self, source: &SceneObject) {
        self.properties = Some(PropertySnapshot::of(source));
    }

    pub fn properties(&self) -> Option<&PropertySnapshot> {
        self.properties.as_ref()
    }
}
