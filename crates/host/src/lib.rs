//! Host-facing surface of the hotcycle plugin.
//!
//! The 3D host owns the scene, its tool settings, and the keymap layer;
//! the plugin only ever reaches them through the traits in this crate.
//! [`Host`] covers settings access, operator invocation, and action
//! registration; [`KeymapRegistry`]/[`KeymapContext`] cover binding
//! installation. [`MemoryHost`] is a complete in-memory implementation
//! used for headless runs and tests.

pub use action::{Action, ActionError, Outcome};
pub use host::{Host, HostError, SmoothParams};
pub use keymap::{Binding, BindingHandle, KeymapContext, KeymapRegistry, Trigger};
pub use memory::{MemoryContext, MemoryHost, MemoryKeymaps};
pub use mode::InteractionMode;
pub use settings::{Orientation, PivotPoint};

mod action;
mod host;
mod keymap;
mod memory;
mod mode;
mod settings;
