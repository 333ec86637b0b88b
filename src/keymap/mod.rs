//! Keybinding registry and key event dispatch
//!
//! This module provides the editor's shortcut system:
//! - A registry of named groups of bindings, each with a default chord and handler
//! - User overrides loaded from `keybindings.conf` and written back on save
//! - A dispatcher that routes key presses to terminal passthrough, snippet
//!   completion, the registry, or the fixed tab shortcuts
//!
//! # Architecture
//!
//! ```text
//! winit::KeyEvent → RawKeyEvent → Chord → Keybindings::dispatch() → Handler → EditorHost
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut keys = Keybindings::init(Preferences::load(), store_path);
//! let handled = keys.handle_key_event(event, &mut host);
//! keys.run_idle(&mut host); // on every idle tick
//! ```

mod accel;
mod binding;
mod command;
mod config;
mod context;
mod defaults;
mod dispatch;
mod handler;
mod host;
mod idle;
#[allow(clippy::module_inception)]
mod keymap;
mod types;
mod winit_adapter;

pub use accel::ChordParseError;
pub use binding::{Binding, Group};
pub use command::{
    BuildKey, Command, DocumentKey, EditKey, EditingKey, FileKey, FocusKey, GroupCommand, GroupId,
    HelpKey, NotebookKey, OtherKey, SearchKey, TagsKey, ToolsKey, ViewKey,
};
pub use config::{
    apply_overrides, load_overrides, read_store, save_keybindings, KeymapError, STORE_HEADER,
};
pub use context::{Focus, KeyContext};
pub use defaults::{default_keymap, load_keymap, DEFAULT_SECTION};
pub use dispatch::{Dispatch, FixedBinding, Keybindings};
pub use handler::{move_tab_target, Handler, HandlerEnv};
pub use host::{EditorHost, TabDirection};
pub use idle::{IdleQueue, IdleTask};
pub use keymap::{BindingRef, Keymap};
pub use types::{Chord, KeyCode, Modifiers, RawKeyEvent, NUM_LOCK_MASK, SUPER_MASK};
pub use winit_adapter::raw_event_from_winit;
