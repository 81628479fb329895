//! Combined editor session state
//!
//! [`EditorSession`] is the single owner of the scene, selection, clipboard,
//! and history for one editing session, and the only mutation facade.
//! Collaborators (renderer, camera controls, persistence) read through the
//! accessors and poll [`SessionEvent`]s; nothing outside this facade mutates
//! scene state, which is what keeps every mutation behind the
//! snapshot-then-apply choke point.

pub mod clipboard;
pub mod scene;
pub mod selection;

use std::collections::VecDeque;

use glam::DVec3;
use shared::{
    LightKind, ObjectId, SceneFile, SceneObject, SceneObjectPatch, SceneSettingsPatch, ShapeKind,
};

pub use clipboard::{ClipboardState, PropertySnapshot};
pub use scene::{SceneState, Snapshot, MAX_UNDO_DEPTH};
pub use selection::SelectionState;

use crate::context_menu::{ContextMenu, ContextMenuItem};
use crate::error::EditorError;
use crate::import::{ImportError, ImportedAsset};
use shared::ObjectKind;

/// Pasted/duplicated objects are offset so clones never sit exactly on
/// their source.
pub const PASTE_OFFSET: DVec3 = DVec3::ONE;

/// Which gizmo the renderer should attach to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// What happens to the selection after a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PastePolicy {
    /// Leave the selection as it was (stock behavior).
    #[default]
    Keep,
    /// Select the freshly pasted clones.
    SelectPasted,
}

/// Cross-component effects raised by the session for collaborators to poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Orbit input toggles opposite to selection: a non-empty selection
    /// disables orbiting so gizmo drags don't fight the camera.
    CameraOrbitEnabled(bool),
}

/// One editing session: scene + selection + clipboard + history + input
/// modality, behind a single mutation facade.
pub struct EditorSession {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub clipboard: ClipboardState,
    pub context_menu: ContextMenu,
    pub transform_mode: TransformMode,
    pub paste_policy: PastePolicy,
    next_id: ObjectId,
    camera_orbit_enabled: bool,
    events: VecDeque<SessionEvent>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            clipboard: ClipboardState::default(),
            context_menu: ContextMenu::default(),
            transform_mode: TransformMode::default(),
            paste_policy: PastePolicy::default(),
            next_id: 1,
            camera_orbit_enabled: true,
            events: VecDeque::new(),
        }
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next queued cross-component event, if any.
    pub fn poll_event(&mut self) -> Option<SessionEvent> {
        self.events.pop_front()
    }

    /// Whether camera-orbit input is currently allowed.
    pub fn camera_orbit_enabled(&self) -> bool {
        self.camera_orbit_enabled
    }

    /// Ids are monotonically increasing and never reused, even when the
    /// creating action is undone.
    fn alloc_id(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn sync_camera(&mut self) {
        let enabled = self.selection.is_empty();
        if enabled != self.camera_orbit_enabled {
            self.camera_orbit_enabled = enabled;
            self.events.push_back(SessionEvent::CameraOrbitEnabled(enabled));
        }
    }

    // ── Object creation ───────────────────────────────────────

    /// Place a primitive shape at the origin (toolbar "add").
    pub fn add_shape(&mut self, kind: ShapeKind) -> ObjectId {
        let id = self.alloc_id();
        self.scene.add_object(SceneObject::shape(id, kind))
    }

    /// Place a light with stock parameters (toolbar "add").
    pub fn add_light(&mut self, kind: LightKind) -> ObjectId {
        let id = self.alloc_id();
        self.scene.add_object(SceneObject::light(id, kind))
    }

    // ── Selection ─────────────────────────────────────────────

    /// Replace the selection wholesale. Ids not present in the scene are
    /// dropped so the selection invariant holds at entry.
    pub fn select(&mut self, ids: Vec<ObjectId>) {
        let ids: Vec<ObjectId> = ids
            .into_iter()
            .filter(|id| self.scene.contains(*id))
            .collect();
        self.selection.select(ids);
        self.sync_camera();
    }

    /// Ctrl+click: toggle one id in the selection.
    pub fn toggle_select(&mut self, id: ObjectId) {
        if self.scene.contains(id) {
            self.selection.toggle(id);
        }
        self.sync_camera();
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
        self.sync_camera();
    }

    // ── Mutation ──────────────────────────────────────────────

    /// Delete the selected objects. No-op with an empty selection.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let ids = self.selection.all().to_vec();
        let removed = self.scene.remove_objects(&ids);
        self.selection.clear();
        self.sync_camera();
        removed
    }

    /// Shallow-merge a partial edit into one object.
    pub fn update_object(
        &mut self,
        id: ObjectId,
        patch: &SceneObjectPatch,
    ) -> Result<(), EditorError> {
        self.scene.update_object(id, patch)
    }

    /// Shallow-merge a partial edit into the scene settings.
    pub fn update_settings(&mut self, patch: &SceneSettingsPatch) {
        self.scene.update_settings(patch);
    }

    /// Move every selected object by `delta` as one undo step. No-op with
    /// an empty selection.
    pub fn translate_selected(&mut self, delta: DVec3) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let ids = self.selection.all().to_vec();
        self.scene.translate_objects(&ids, delta.to_array()) > 0
    }

    /// Pick the gizmo mode. Only meaningful with something selected.
    pub fn set_transform_mode(&mut self, mode: TransformMode) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.transform_mode = mode;
        true
    }

    // ── History ───────────────────────────────────────────────

    /// Undo the last action. The current selection is filtered against the
    /// restored object list rather than restored from the snapshot;
    /// selection is treated as UI-ephemeral.
    pub fn undo(&mut self) -> bool {
        let applied = self.scene.undo();
        if applied {
            self.selection.retain_existing(self.scene.objects());
            self.sync_camera();
        }
        applied
    }

    /// Redo the last undone action. Selection handling mirrors [`undo`].
    ///
    /// [`undo`]: EditorSession::undo
    pub fn redo(&mut self) -> bool {
        let applied = self.scene.redo();
        if applied {
            self.selection.retain_existing(self.scene.objects());
            self.sync_camera();
        }
        applied
    }

    // ── Clipboard ─────────────────────────────────────────────

    /// Deep-copy the selected objects into the clipboard, in scene order.
    pub fn copy_selected(&mut self) -> usize {
        let copies: Vec<SceneObject> = self
            .scene
            .objects()
            .iter()
            .filter(|o| self.selection.is_selected(o.id))
            .cloned()
            .collect();
        self.clipboard.copy_objects(copies)
    }

    /// Clone the clipboard into the scene with fresh ids, offset by
    /// [`PASTE_OFFSET`], as one undo step. No-op with an empty buffer.
    pub fn paste(&mut self) -> Vec<ObjectId> {
        let buffered = self.clipboard.objects().to_vec();
        let new_ids = self.insert_clones(buffered);
        if !new_ids.is_empty() && self.paste_policy == PastePolicy::SelectPasted {
            self.select(new_ids.clone());
        }
        new_ids
    }

    /// Clone the selected objects in place (context menu / Ctrl+D). The
    /// clones become the new selection.
    pub fn duplicate_selected(&mut self) -> Vec<ObjectId> {
        let sources: Vec<SceneObject> = self
            .scene
            .objects()
            .iter()
            .filter(|o| self.selection.is_selected(o.id))
            .cloned()
            .collect();
        let new_ids = self.insert_clones(sources);
        if !new_ids.is_empty() {
            self.select(new_ids.clone());
        }
        new_ids
    }

    fn insert_clones(&mut self, sources: Vec<SceneObject>) -> Vec<ObjectId> {
        let mut clones = Vec::with_capacity(sources.len());
        let mut new_ids = Vec::with_capacity(sources.len());
        for mut object in sources {
            let id = self.alloc_id();
            object.id = id;
            object.position[0] += PASTE_OFFSET.x;
            object.position[1] += PASTE_OFFSET.y;
            object.position[2] += PASTE_OFFSET.z;
            new_ids.push(id);
            clones.push(object);
        }
        self.scene.insert_objects(clones);
        new_ids
    }

    /// Capture transform + material of the single selected object.
    /// Requires exactly one object selected.
    pub fn copy_properties(&mut self) -> bool {
        if self.selection.count() != 1 {
            return false;
        }
        let Some(id) = self.selection.primary() else {
            return false;
        };
        match self.scene.get_object(id) {
            Some(source) => {
                self.clipboard.copy_properties(source);
                true
            }
            None => false,
        }
    }

    /// Apply the captured properties onto every selected object as one
    /// undo step. Lights keep having no material.
    pub fn paste_properties(&mut self) -> usize {
        let Some(props) = self.clipboard.properties().cloned() else {
            return 0;
        };
        if self.selection.is_empty() {
            return 0;
        }
        let ids = self.selection.all().to_vec();
        self.scene.modify_objects(&ids, |object| {
            object.position = props.position;
            object.rotation = props.rotation;
            object.scale = props.scale;
            if !object.kind.is_light() {
                object.material = props.material.clone();
            }
        })
    }

    // ── Context menu ──────────────────────────────────────────

    pub fn open_context_menu(&mut self, x: f32, y: f32) {
        self.context_menu.open_at(x, y);
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu.close();
    }

    /// Run a menu entry and close the menu.
    pub fn activate_menu_item(&mut self, item: ContextMenuItem) {
        match item {
            ContextMenuItem::Copy => {
                self.copy_selected();
            }
            ContextMenuItem::Paste => {
                self.paste();
            }
            ContextMenuItem::Duplicate => {
                self.duplicate_selected();
            }
            ContextMenuItem::Rotate => {
                self.set_transform_mode(TransformMode::Rotate);
            }
            ContextMenuItem::Scale => {
                self.set_transform_mode(TransformMode::Scale);
            }
        }
        self.context_menu.close();
    }

    // ── Import ────────────────────────────────────────────────

    /// Single completion point of an asynchronous import. A successful
    /// result is spliced in atomically as one undo step; a failed or
    /// cancelled import leaves the scene untouched.
    pub fn complete_import(
        &mut self,
        result: Result<Vec<ImportedAsset>, ImportError>,
    ) -> Result<Vec<ObjectId>, EditorError> {
        let assets = result?;
        if assets.is_empty() {
            return Ok(Vec::new());
        }

        let mut objects = Vec::with_capacity(assets.len());
        let mut new_ids = Vec::with_capacity(assets.len());
        for asset in assets {
            let id = self.alloc_id();
            new_ids.push(id);
            objects.push(SceneObject {
                id,
                display_id: Some(asset.type_name),
                position: asset.position,
                rotation: asset.rotation,
                scale: asset.scale,
                material: asset.material,
                children: Vec::new(),
                kind: ObjectKind::ImportedMesh {
                    mesh: asset.mesh,
                    bounding_box: asset.bounding_box,
                    original_file_name: asset.original_file_name,
                },
            });
        }
        tracing::info!(count = new_ids.len(), "import spliced into scene");
        self.scene.insert_objects(objects);
        Ok(new_ids)
    }

    // ── Persistence ───────────────────────────────────────────

    /// Snapshot the session as a persistable document.
    pub fn serialize(&self) -> SceneFile {
        self.scene.to_scene_file()
    }

    /// Replace the session state with a loaded document. Bypasses history,
    /// drops the selection, and advances the id allocator past every
    /// loaded id.
    pub fn load(&mut self, file: SceneFile) {
        self.scene.load_scene_file(file);
        self.selection.clear();
        let max_id = self.scene.objects().iter().map(|o| o.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.sync_camera();
    }
}
