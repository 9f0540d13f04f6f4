//! Input mapping: physical keys and pointer motion turned into viewer actions.
//!
//! # Invariants
//! - The frame loop consumes actions, never raw key codes.
//! - One-shot actions fire on the press edge only, never while a key is held.

pub mod action;
pub mod cursor;
pub mod state;

pub use action::{Action, Key, NUDGE_PIXELS};
pub use cursor::VirtualCursor;
pub use state::{InputState, KeyBindings};
