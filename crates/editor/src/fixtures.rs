//! Factory functions for creating test data.
//!
//! Convenient helpers to construct objects, sessions, and scene documents
//! used by the integration tests and the command protocol tests.

use shared::{LightKind, ObjectId, SceneFile, SceneObject, SceneSettings, ShapeKind};

use crate::state::EditorSession;

// ── Object factories ────────────────────────────────────────────

/// Create a cube at a specific position.
pub fn cube_at(id: ObjectId, pos: [f64; 3]) -> SceneObject {
    let mut object = SceneObject::shape(id, ShapeKind::Cube);
    object.position = pos;
    object
}

/// Create a sphere at the origin.
pub fn unit_sphere(id: ObjectId) -> SceneObject {
    SceneObject::shape(id, ShapeKind::Sphere)
}

/// Create a point light at its stock position.
pub fn point_light(id: ObjectId) -> SceneObject {
    SceneObject::light(id, LightKind::PointLight)
}

// ── Session factories ───────────────────────────────────────────

/// Session with one cube added, nothing selected.
pub fn session_single_cube() -> (EditorSession, ObjectId) {
    let mut session = EditorSession::new();
    let id = session.add_shape(ShapeKind::Cube);
    (session, id)
}

/// Session with one of each primitive shape, in toolbar order.
pub fn session_all_shapes() -> (EditorSession, Vec<ObjectId>) {
    let mut session = EditorSession::new();
    let ids = ShapeKind::ALL
        .iter()
        .map(|kind| session.add_shape(*kind))
        .collect();
    (session, ids)
}

/// Session with a cube, a sphere, and a point light; the cube and sphere
/// are selected.
pub fn session_mixed_selected() -> (EditorSession, Vec<ObjectId>) {
    let mut session = EditorSession::new();
    let a = session.add_shape(ShapeKind::Cube);
    let b = session.add_shape(ShapeKind::Sphere);
    session.add_light(LightKind::PointLight);
    session.select(vec![a, b]);
    (session, vec![a, b])
}

// ── Document factories ──────────────────────────────────────────

/// Empty persisted document.
pub fn empty_scene_file() -> SceneFile {
    SceneFile {
        scene_id: Some("00000000-0000-0000-0000-000000000000".to_string()),
        scene_name: Some("Fixture".to_string()),
        scene_settings: SceneSettings::default(),
        objects: Vec::new(),
    }
}

/// Document with a few objects at known positions.
pub fn scene_file_three_cubes() -> SceneFile {
    let mut file = empty_scene_file();
    file.objects = vec![
        cube_at(1, [0.0, 0.0, 0.0]),
        cube_at(2, [2.0, 0.0, 0.0]),
        cube_at(3, [4.0, 0.0, 0.0]),
    ];
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_at_factory() {
        let object = cube_at(7, [1.0, 2.0, 3.0]);
        assert_eq!(object.id, 7);
        assert_eq!(object.position, [1.0, 2.0, 3.0]);
        assert!(object.material.is_some());
    }

    #[test]
    fn test_session_all_shapes_covers_toolbar() {
        let (session, ids) = session_all_shapes();
        assert_eq!(ids.len(), ShapeKind::ALL.len());
        assert_eq!(session.scene.object_count(), ids.len());
    }

    #[test]
    fn test_session_mixed_selected() {
        let (session, selected) = session_mixed_selected();
        assert_eq!(session.scene.object_count(), 3);
        assert_eq!(session.selection.all(), selected.as_slice());
    }
}
