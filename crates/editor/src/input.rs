//! Viewport input routing
//!
//! Maps raw key/mouse events onto session operations. Shortcuts only fire
//! while the viewport has focus; typing in a text field never mutates the
//! scene. Returns whether the event was consumed so the caller can fall
//! through to camera controls.

use glam::DVec3;

use crate::state::{EditorSession, TransformMode};

/// Nudge distance per arrow-key press, in world units.
pub const ARROW_STEP: f64 = 0.5;

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        shift: true,
    };
}

/// Keys the editor binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Escape,
    Z,
    Y,
    C,
    V,
    A,
    Q,
    T,
    R,
    S,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// A raw input event from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: Key, modifiers: Modifiers },
    /// Primary click somewhere that is not a menu entry.
    LeftClick,
    /// Secondary click at viewport coordinates.
    RightClick { x: f32, y: f32 },
}

/// Where keyboard focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    Viewport,
    /// A property-panel text field owns the keyboard; shortcuts are off.
    TextField,
}

/// Route one event into the session. Returns true if consumed.
pub fn route_event(session: &mut EditorSession, event: InputEvent, focus: InputFocus) -> bool {
    match event {
        InputEvent::KeyDown { key, modifiers } => {
            if focus == InputFocus::TextField {
                return false;
            }
            route_key(session, key, modifiers)
        }

        // Clicking anywhere outside a menu entry dismisses the menu
        InputEvent::LeftClick => {
            if session.context_menu.is_open() {
                session.close_context_menu();
                true
            } else {
                false
            }
        }

        InputEvent::RightClick { x, y } => {
            session.open_context_menu(x, y);
            true
        }
    }
}

fn route_key(session: &mut EditorSession, key: Key, modifiers: Modifiers) -> bool {
    if modifiers.ctrl {
        return match key {
            Key::Z if modifiers.shift => session.redo(),
            Key::Z => session.undo(),
            Key::Y => session.redo(),
            Key::C => session.copy_selected() > 0,
            Key::V => !session.paste().is_empty(),
            Key::A => session.copy_properties(),
            Key::Q => session.paste_properties() > 0,
            _ => false,
        };
    }

    match key {
        Key::Delete => session.delete_selected() > 0,

        Key::Escape => {
            if session.context_menu.is_open() {
                session.close_context_menu();
            } else {
                session.deselect_all();
            }
            true
        }

        Key::T => session.set_transform_mode(TransformMode::Translate),
        Key::R => session.set_transform_mode(TransformMode::Rotate),
        Key::S => session.set_transform_mode(TransformMode::Scale),

        Key::ArrowUp => session.translate_selected(DVec3::new(0.0, ARROW_STEP, 0.0)),
        Key::ArrowDown => session.translate_selected(DVec3::new(0.0, -ARROW_STEP, 0.0)),
        Key::ArrowLeft => session.translate_selected(DVec3::new(-ARROW_STEP, 0.0, 0.0)),
        Key::ArrowRight => session.translate_selected(DVec3::new(ARROW_STEP, 0.0, 0.0)),

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use shared::ShapeKind;

    use super::*;

    fn key(key: Key, modifiers: Modifiers) -> InputEvent {
        InputEvent::KeyDown { key, modifiers }
    }

    #[test]
    fn test_delete_requires_selection() {
        let mut session = EditorSession::new();
        session.add_shape(ShapeKind::Cube);

        assert!(!route_event(
            &mut session,
            key(Key::Delete, Modifiers::NONE),
            InputFocus::Viewport,
        ));
        assert_eq!(session.scene.object_count(), 1);
    }

    #[test]
    fn test_text_field_focus_swallows_nothing() {
        let mut session = EditorSession::new();
        let id = session.add_shape(ShapeKind::Cube);
        session.select(vec![id]);

        assert!(!route_event(
            &mut session,
            key(Key::Delete, Modifiers::NONE),
            InputFocus::TextField,
        ));
        assert_eq!(session.scene.object_count(), 1);
    }

    #[test]
    fn test_ctrl_z_undoes() {
        let mut session = EditorSession::new();
        session.add_shape(ShapeKind::Cube);

        assert!(route_event(
            &mut session,
            key(Key::Z, Modifiers::CTRL),
            InputFocus::Viewport,
        ));
        assert_eq!(session.scene.object_count(), 0);
    }

    #[test]
    fn test_both_redo_bindings() {
        let mut session = EditorSession::new();
        session.add_shape(ShapeKind::Cube);
        session.undo();

        assert!(route_event(
            &mut session,
            key(Key::Z, Modifiers::CTRL_SHIFT),
            InputFocus::Viewport,
        ));
        assert_eq!(session.scene.object_count(), 1);

        session.undo();
        assert!(route_event(
            &mut session,
            key(Key::Y, Modifiers::CTRL),
            InputFocus::Viewport,
        ));
        assert_eq!(session.scene.object_count(), 1);
    }

    #[test]
    fn test_arrow_keys_nudge_selection() {
        let mut session = EditorSession::new();
        let id = session.add_shape(ShapeKind::Cube);
        session.select(vec![id]);

        route_event(
            &mut session,
            key(Key::ArrowUp, Modifiers::NONE),
            InputFocus::Viewport,
        );
        route_event(
            &mut session,
            key(Key::ArrowRight, Modifiers::NONE),
            InputFocus::Viewport,
        );
        assert_eq!(
            session.scene.get_object(id).unwrap().position,
            [ARROW_STEP, ARROW_STEP, 0.0]
        );

        route_event(
            &mut session,
            key(Key::ArrowDown, Modifiers::NONE),
            InputFocus::Viewport,
        );
        route_event(
            &mut session,
            key(Key::ArrowLeft, Modifiers::NONE),
            InputFocus::Viewport,
        );
        assert_eq!(session.scene.get_object(id).unwrap().position, [0.0; 3]);
    }

    #[test]
    fn test_transform_mode_keys_need_selection() {
        let mut session = EditorSession::new();
        let id = session.add_shape(ShapeKind::Cube);

        assert!(!route_event(
            &mut session,
            key(Key::R, Modifiers::NONE),
            InputFocus::Viewport,
        ));
        assert_eq!(session.transform_mode, TransformMode::Translate);

        session.select(vec![id]);
        assert!(route_event(
            &mut session,
            key(Key::S, Modifiers::NONE),
            InputFocus::Viewport,
        ));
        assert_eq!(session.transform_mode, TransformMode::Scale);
    }

    #[test]
    fn test_escape_closes_menu_before_deselecting() {
        let mut session = EditorSession::new();
        let id = session.add_shape(ShapeKind::Cube);
        session.select(vec![id]);
        session.open_context_menu(10.0, 10.0);

        route_event(
            &mut session,
            key(Key::Escape, Modifiers::NONE),
            InputFocus::Viewport,
        );
        assert!(!session.context_menu.is_open());
        assert!(!session.selection.is_empty());

        route_event(
            &mut session,
            key(Key::Escape, Modifiers::NONE),
            InputFocus::Viewport,
        );
        assert!(session.selection.is_empty());
    }

    #[test]
    fn test_right_click_opens_left_click_dismisses() {
        let mut session = EditorSession::new();

        assert!(route_event(
            &mut session,
            InputEvent::RightClick { x: 40.0, y: 80.0 },
            InputFocus::Viewport,
        ));
        assert_eq!(session.context_menu.position(), Some((40.0, 80.0)));

        assert!(route_event(
            &mut session,
            InputEvent::LeftClick,
            InputFocus::Viewport,
        ));
        assert!(!session.context_menu.is_open());
    }
}
