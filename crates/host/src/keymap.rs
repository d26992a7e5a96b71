//! Binding installation surface of the host's keymap layer.

use hotcycle_keyspec::Chord;

use crate::host::HostError;

/// Event that fires a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trigger {
	#[default]
	Press,
	Release,
}

/// A binding as installed into a host keymap context: a chord mapped to an
/// action identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
	pub action: String,
	pub chord: Chord,
	pub trigger: Trigger,
}

/// Opaque handle to an installed binding, unique within its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingHandle(pub(crate) u64);

/// The host's set of named keymap contexts.
///
/// A host running without an interactive binding layer exposes no registry
/// at all (see [`Host::keymaps`]); a registry that exists may still fail to
/// resolve individual context names.
///
/// [`Host::keymaps`]: crate::Host::keymaps
pub trait KeymapRegistry {
	/// Resolves a context by name, or `None` if the host has no such
	/// binding context.
	fn context(&mut self, name: &str) -> Option<&mut dyn KeymapContext>;
}

/// One named binding context (e.g. the 3D viewport, the mesh edit mode).
pub trait KeymapContext {
	/// Installs a binding and returns its handle.
	fn install(&mut self, binding: &Binding) -> BindingHandle;

	/// Removes a previously installed binding.
	fn remove(&mut self, handle: BindingHandle) -> Result<(), HostError>;

	/// Removes every binding whose action identifier is in `action_ids`,
	/// returning how many were removed.
	fn remove_by_action(&mut self, action_ids: &[&str]) -> usize;
}
