//! Integration tests for keyboard/mouse routing and the context menu.

use artx_editor_lib::context_menu::ContextMenuItem;
use artx_editor_lib::fixtures::*;
use artx_editor_lib::input::{route_event, InputEvent, InputFocus, Key, Modifiers, ARROW_STEP};
use artx_editor_lib::state::{EditorSession, SessionEvent, TransformMode};
use shared::ShapeKind;

fn press(session: &mut EditorSession, key: Key, modifiers: Modifiers) -> bool {
    route_event(
        session,
        InputEvent::KeyDown { key, modifiers },
        InputFocus::Viewport,
    )
}

#[test]
fn test_full_binding_table() {
    let (mut session, id) = session_single_cube();
    session.select(vec![id]);

    // Ctrl+C / Ctrl+V
    assert!(press(&mut session, Key::C, Modifiers::CTRL));
    assert!(press(&mut session, Key::V, Modifiers::CTRL));
    assert_eq!(session.scene.object_count(), 2);

    // Ctrl+Z undoes the paste
    assert!(press(&mut session, Key::Z, Modifiers::CTRL));
    assert_eq!(session.scene.object_count(), 1);

    // Ctrl+Y redoes it
    assert!(press(&mut session, Key::Y, Modifiers::CTRL));
    assert_eq!(session.scene.object_count(), 2);

    // Delete removes the selection
    assert!(press(&mut session, Key::Delete, Modifiers::NONE));
    assert_eq!(session.scene.object_count(), 1);
}

#[test]
fn test_arrow_nudges_accumulate_per_press() {
    let (mut session, id) = session_single_cube();
    session.select(vec![id]);

    for _ in 0..3 {
        press(&mut session, Key::ArrowUp, Modifiers::NONE);
    }
    assert_eq!(
        session.scene.get_object(id).unwrap().position[1],
        3.0 * ARROW_STEP
    );

    // Each press is its own undo step
    press(&mut session, Key::Z, Modifiers::CTRL);
    assert_eq!(
        session.scene.get_object(id).unwrap().position[1],
        2.0 * ARROW_STEP
    );
}

#[test]
fn test_arrows_without_selection_do_nothing() {
    let (mut session, id) = session_single_cube();
    assert!(!press(&mut session, Key::ArrowLeft, Modifiers::NONE));
    assert_eq!(session.scene.get_object(id).unwrap().position, [0.0; 3]);
    // Only the add itself is on the undo stack
    assert_eq!(session.scene.undo_depth(), 1);
}

#[test]
fn test_property_shortcuts() {
    let mut session = EditorSession::new();
    let source = session.add_shape(ShapeKind::Cube);
    let target = session.add_shape(ShapeKind::Sphere);
    session.select(vec![source]);
    press(&mut session, Key::ArrowRight, Modifiers::NONE);

    assert!(press(&mut session, Key::A, Modifiers::CTRL));

    session.select(vec![target]);
    assert!(press(&mut session, Key::Q, Modifiers::CTRL));
    assert_eq!(
        session.scene.get_object(target).unwrap().position,
        [ARROW_STEP, 0.0, 0.0]
    );
}

#[test]
fn test_text_field_focus_disables_all_shortcuts() {
    let (mut session, id) = session_single_cube();
    session.select(vec![id]);

    for (key, modifiers) in [
        (Key::Delete, Modifiers::NONE),
        (Key::Z, Modifiers::CTRL),
        (Key::C, Modifiers::CTRL),
        (Key::ArrowUp, Modifiers::NONE),
        (Key::R, Modifiers::NONE),
    ] {
        assert!(!route_event(
            &mut session,
            InputEvent::KeyDown { key, modifiers },
            InputFocus::TextField,
        ));
    }
    assert_eq!(session.scene.object_count(), 1);
    assert_eq!(session.scene.get_object(id).unwrap().position, [0.0; 3]);
    assert_eq!(session.transform_mode, TransformMode::Translate);
}

#[test]
fn test_context_menu_item_dispatch() {
    let (mut session, id) = session_single_cube();
    session.select(vec![id]);
    session.open_context_menu(50.0, 50.0);

    session.activate_menu_item(ContextMenuItem::Duplicate);
    assert!(!session.context_menu.is_open());
    assert_eq!(session.scene.object_count(), 2);
    // The duplicate is now selected
    assert!(!session.selection.is_selected(id));

    session.open_context_menu(60.0, 60.0);
    session.activate_menu_item(ContextMenuItem::Rotate);
    assert_eq!(session.transform_mode, TransformMode::Rotate);
    assert!(!session.context_menu.is_open());
}

#[test]
fn test_context_menu_copy_paste_items() {
    let (mut session, id) = session_single_cube();
    session.select(vec![id]);

    session.open_context_menu(10.0, 10.0);
    session.activate_menu_item(ContextMenuItem::Copy);

    session.open_context_menu(10.0, 10.0);
    session.activate_menu_item(ContextMenuItem::Paste);
    assert_eq!(session.scene.object_count(), 2);
}

#[test]
fn test_camera_orbit_toggles_with_selection_via_input() {
    let (mut session, id) = session_single_cube();
    session.select(vec![id]);
    assert_eq!(
        session.poll_event(),
        Some(SessionEvent::CameraOrbitEnabled(false))
    );

    press(&mut session, Key::Escape, Modifiers::NONE);
    assert_eq!(
        session.poll_event(),
        Some(SessionEvent::CameraOrbitEnabled(true))
    );
    assert!(session.poll_event().is_none());
}

#[test]
fn test_delete_reenables_camera_orbit() {
    let (mut session, id) = session_single_cube();
    session.select(vec![id]);
    let _ = session.poll_event();

    press(&mut session, Key::Delete, Modifiers::NONE);
    assert_eq!(
        session.poll_event(),
        Some(SessionEvent::CameraOrbitEnabled(true))
    );
}
