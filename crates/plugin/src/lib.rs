//! Hotkeys that cycle viewport tool settings and smooth selected vertices.
//!
//! The plugin contributes three actions to a 3D host — cycle the transform
//! pivot point, cycle the active transform orientation, smooth the selected
//! mesh vertices — and a declarative keybind table that maps ctrl-alt-shift
//! chords in the `view3d` and `mesh` binding contexts to those actions.
//!
//! [`Plugin::activate`] registers the actions and installs the keybinds
//! through the [`hotcycle_host`] traits; [`Plugin::deactivate`] withdraws
//! both in reverse order. Hosts without an interactive binding layer get
//! the actions but no keybinds. Chords and contexts can be remapped per
//! action from a KDL `keybinds { }` node (see [`load_keybinds`]).

pub use config::{ConfigError, apply_overrides, load_keybinds};
pub use cycle::{Cycle, CycleError, advance};
pub use keybinds::{DEFAULT_MODIFIERS, Keybind, MESH_CONTEXT, VIEW3D_CONTEXT, builtin_keybinds};
pub use plugin::Plugin;
pub use registrar::{InstalledBindings, install, uninstall};

pub mod actions;
mod config;
mod cycle;
mod keybinds;
mod plugin;
mod registrar;
