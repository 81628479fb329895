//! Viewport context menu state machine
//!
//! Two states only: closed, or open at a cursor position. Opening captures
//! the cursor; the menu closes on an outside click, on any item
//! activation, or on Escape. No nesting.

/// Current menu state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContextMenu {
    #[default]
    Closed,
    Open {
        x: f32,
        y: f32,
    },
}

impl ContextMenu {
    pub fn open_at(&mut self, x: f32, y: f32) {
        *self = ContextMenu::Open { x, y };
    }

    pub fn close(&mut self) {
        *self = ContextMenu::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ContextMenu::Open { .. })
    }

    /// Cursor position the menu was opened at.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            ContextMenu::Open { x, y } => Some((*x, *y)),
            ContextMenu::Closed => None,
        }
    }
}

/// Entries the menu offers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuItem {
    Copy,
    Paste,
    Duplicate,
    Rotate,
    Scale,
}

impl ContextMenuItem {
    pub const ALL: [ContextMenuItem; 5] = [
        ContextMenuItem::Copy,
        ContextMenuItem::Paste,
        ContextMenuItem::Duplicate,
        ContextMenuItem::Rotate,
        ContextMenuItem::Scale,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContextMenuItem::Copy => "Copy",
            ContextMenuItem::Paste => "Paste",
            ContextMenuItem::Duplicate => "Duplicate",
            ContextMenuItem::Rotate => "Rotate",
            ContextMenuItem::Scale => "Scale",
        }
    }
}
