//! JSON command protocol for scripted/agent control.
//!
//! Commands operate directly on an [`EditorSession`]; the same entry
//! points back the stdin driver in `main` and the protocol tests.

use serde::{Deserialize, Serialize};
use shared::{LightKind, ObjectId, SceneObjectPatch, SceneSettingsPatch, ShapeKind};

use crate::state::EditorSession;

/// A command a driver can execute against the session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a primitive shape at the origin.
    AddShape { shape: ShapeKind },
    /// Add a light with stock parameters.
    AddLight { light: LightKind },
    /// Delete the currently selected objects.
    Delete,
    /// Replace the selection with the given ids.
    Select { ids: Vec<ObjectId> },
    /// Clear the selection.
    ClearSelection,
    /// Shallow-merge a partial edit into one object.
    UpdateObject {
        id: ObjectId,
        patch: SceneObjectPatch,
    },
    /// Shallow-merge a partial edit into the scene settings.
    UpdateSettings { patch: SceneSettingsPatch },
    /// Move the selected objects by a delta.
    Translate { delta: [f64; 3] },
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Copy the selected objects to the clipboard.
    Copy,
    /// Paste the clipboard into the scene.
    Paste,
    /// Duplicate the selected objects in place.
    Duplicate,
    /// Inspect the scene: list all objects.
    Inspect,
    /// Export the scene document as JSON.
    ExportScene,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the session.
pub fn execute_command(session: &mut EditorSession, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::AddShape { shape } => {
            let id = session.add_shape(shape);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::AddLight { light } => {
            let id = session.add_light(light);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::Delete => {
            let removed = session.delete_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        EditorCommand::Select { ids } => {
            session.select(ids);
            CommandResponse::ok_with_data(serde_json::json!({
                "selected": session.selection.all(),
            }))
        }

        EditorCommand::ClearSelection => {
            session.deselect_all();
            CommandResponse::ok()
        }

        EditorCommand::UpdateObject { id, patch } => match session.update_object(id, &patch) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::UpdateSettings { patch } => {
            session.update_settings(&patch);
            CommandResponse::ok()
        }

        EditorCommand::Translate { delta } => {
            let moved = session.translate_selected(glam::DVec3::from_array(delta));
            CommandResponse::ok_with_data(serde_json::json!({ "moved": moved }))
        }

        EditorCommand::Undo => {
            let success = session.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = session.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::Copy => {
            let copied = session.copy_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "copied": copied }))
        }

        EditorCommand::Paste => {
            let ids = session.paste();
            CommandResponse::ok_with_data(serde_json::json!({ "pasted": ids }))
        }

        EditorCommand::Duplicate => {
            let ids = session.duplicate_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "duplicated": ids }))
        }

        EditorCommand::Inspect => {
            let objects: Vec<serde_json::Value> = session
                .scene
                .objects()
                .iter()
                .map(|object| {
                    serde_json::json!({
                        "id": object.id,
                        "type": object.kind.tag(),
                        "position": object.position,
                        "selected": session.selection.is_selected(object.id),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "object_count": objects.len(),
                "objects": objects,
            }))
        }

        EditorCommand::ExportScene => match serde_json::to_string(&session.serialize()) {
            Ok(json) => CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json })),
            Err(e) => CommandResponse::err(format!("Serialization failed: {e}")),
        },
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(session: &mut EditorSession, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    session: &mut EditorSession,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}
