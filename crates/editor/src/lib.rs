//! Headless editor core: scene model, history, selection, clipboard, and
//! command routing. Rendering, file-format parsing, and the surrounding
//! service shell are external collaborators behind the seams in
//! [`import`] and [`state`].

pub mod command;
pub mod context_menu;
pub mod error;
pub mod fixtures;
pub mod import;
pub mod input;
pub mod state;

pub use error::EditorError;
pub use state::{EditorSession, SessionEvent};
