use std::io::{BufRead, Write};

use artx_editor_lib::command::{execute_json, execute_json_batch};
use artx_editor_lib::state::scene::decode_scene_file;
use artx_editor_lib::state::{EditorSession, SceneState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artx_editor=info".into()),
        )
        .init();

    let mut session = EditorSession::new();

    if let Some(file) = parse_scene_arg() {
        session.load(file);
    } else if SceneState::has_autosave() {
        match SceneState::load_autosave() {
            Some(file) => {
                tracing::info!(objects = file.objects.len(), "Restored autosaved scene");
                session.load(file);
            }
            None => tracing::warn!("Autosave file present but unreadable"),
        }
    }

    // Headless driver: one JSON command (or array of commands) per line on
    // stdin, one JSON response per line on stdout.
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("stdin read failed: {e}");
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let output = if trimmed.starts_with('[') {
            match execute_json_batch(&mut session, trimmed) {
                Ok(responses) => serde_json::to_string(&responses),
                Err(e) => serde_json::to_string(&serde_json::json!({
                    "success": false,
                    "error": e,
                })),
            }
        } else {
            match execute_json(&mut session, trimmed) {
                Ok(response) => serde_json::to_string(&response),
                Err(e) => serde_json::to_string(&serde_json::json!({
                    "success": false,
                    "error": e,
                })),
            }
        };

        let mut out = stdout.lock();
        match output {
            Ok(json) => {
                if writeln!(out, "{json}").is_err() {
                    break;
                }
            }
            Err(e) => tracing::error!("Failed to serialize response: {e}"),
        }
    }

    session.scene.autosave();
}

fn parse_scene_arg() -> Option<shared::SceneFile> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--scene" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read(path) {
                Ok(bytes) => match decode_scene_file(&bytes) {
                    Ok(file) => {
                        tracing::info!("Loaded scene from {path} ({} objects)", file.objects.len());
                        return Some(file);
                    }
                    Err(e) => {
                        tracing::error!("Failed to decode scene file {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read scene file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
