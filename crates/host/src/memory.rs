//! In-memory host implementation.
//!
//! Backs headless runs and the test suites: scene settings are plain
//! fields, the smoothing operator appends to a call log, and chord
//! dispatch walks installed bindings in installation order.

use std::sync::Arc;

use hotcycle_keyspec::Chord;
use indexmap::IndexMap;

use crate::action::{Action, ActionError, Outcome};
use crate::host::{Host, HostError, SmoothParams};
use crate::keymap::{Binding, BindingHandle, KeymapContext, KeymapRegistry, Trigger};
use crate::mode::InteractionMode;
use crate::settings::{Orientation, PivotPoint};

/// One named binding context holding installed bindings in order.
#[derive(Debug, Default)]
pub struct MemoryContext {
	entries: Vec<(BindingHandle, Binding)>,
	next_handle: u64,
}

impl MemoryContext {
	/// Installed bindings, oldest first.
	pub fn bindings(&self) -> &[(BindingHandle, Binding)] {
		&self.entries
	}

	/// First installed binding matching a chord and trigger.
	fn first_match(&self, chord: Chord, trigger: Trigger) -> Option<&Binding> {
		self.entries
			.iter()
			.map(|(_, binding)| binding)
			.find(|binding| binding.chord == chord && binding.trigger == trigger)
	}
}

impl KeymapContext for MemoryContext {
	fn install(&mut self, binding: &Binding) -> BindingHandle {
		self.next_handle += 1;
		let handle = BindingHandle(self.next_handle);
		self.entries.push((handle, binding.clone()));
		handle
	}

	fn remove(&mut self, handle: BindingHandle) -> Result<(), HostError> {
		let position = self
			.entries
			.iter()
			.position(|(installed, _)| *installed == handle)
			.ok_or(HostError::UnknownBinding(handle))?;
		self.entries.remove(position);
		Ok(())
	}

	fn remove_by_action(&mut self, action_ids: &[&str]) -> usize {
		let before = self.entries.len();
		self.entries
			.retain(|(_, binding)| !action_ids.contains(&binding.action.as_str()));
		before - self.entries.len()
	}
}

/// The host's keymap layer as an ordered map of named contexts.
#[derive(Debug, Default)]
pub struct MemoryKeymaps {
	contexts: IndexMap<String, MemoryContext>,
}

impl KeymapRegistry for MemoryKeymaps {
	fn context(&mut self, name: &str) -> Option<&mut dyn KeymapContext> {
		self.contexts
			.get_mut(name)
			.map(|context| context as &mut dyn KeymapContext)
	}
}

/// A complete in-memory [`Host`].
pub struct MemoryHost {
	pivot: PivotPoint,
	orientation: Orientation,
	mode: InteractionMode,
	smooth_calls: Vec<SmoothParams>,
	actions: Vec<Arc<dyn Action>>,
	keymaps: Option<MemoryKeymaps>,
}

impl MemoryHost {
	/// A host with the standard `view3d` and `mesh` binding contexts.
	pub fn new() -> Self {
		Self::with_contexts(&["view3d", "mesh"])
	}

	/// A host exposing the given binding contexts.
	pub fn with_contexts(names: &[&str]) -> Self {
		let contexts = names
			.iter()
			.map(|name| (name.to_string(), MemoryContext::default()))
			.collect();
		Self {
			keymaps: Some(MemoryKeymaps { contexts }),
			..Self::headless()
		}
	}

	/// A host without a keymap layer, as in batch or background runs.
	pub fn headless() -> Self {
		Self {
			pivot: PivotPoint::default(),
			orientation: Orientation::default(),
			mode: InteractionMode::default(),
			smooth_calls: Vec::new(),
			actions: Vec::new(),
			keymaps: None,
		}
	}

	pub fn set_mode(&mut self, mode: InteractionMode) {
		self.mode = mode;
	}

	/// Every invocation of the smoothing operator so far.
	pub fn smooth_calls(&self) -> &[SmoothParams] {
		&self.smooth_calls
	}

	/// Ids of registered actions, in registration order.
	pub fn action_ids(&self) -> Vec<&'static str> {
		self.actions.iter().map(|action| action.id()).collect()
	}

	/// A binding context by name, for inspection.
	pub fn keymap(&self, name: &str) -> Option<&MemoryContext> {
		self.keymaps.as_ref()?.contexts.get(name)
	}

	/// Dispatches a pressed chord in a context, as the host's input layer
	/// would: the first matching binding fires, unmatched chords and
	/// unknown action ids fall through to `None`.
	pub fn dispatch(&mut self, context: &str, chord: Chord) -> Option<Result<Outcome, ActionError>> {
		let action_id = self
			.keymaps
			.as_ref()?
			.contexts
			.get(context)?
			.first_match(chord, Trigger::Press)?
			.action
			.clone();
		let action = self
			.actions
			.iter()
			.find(|action| action.id() == action_id)?
			.clone();
		Some(action.execute(self))
	}
}

impl Default for MemoryHost {
	fn default() -> Self {
		Self::new()
	}
}

impl Host for MemoryHost {
	fn pivot(&self) -> PivotPoint {
		self.pivot
	}

	fn set_pivot(&mut self, pivot: PivotPoint) {
		self.pivot = pivot;
	}

	fn orientation(&self) -> Orientation {
		self.orientation
	}

	fn set_orientation(&mut self, orientation: Orientation) {
		self.orientation = orientation;
	}

	fn mode(&self) -> InteractionMode {
		self.mode
	}

	fn smooth_vertices(&mut self, params: &SmoothParams) -> Result<(), HostError> {
		self.smooth_calls.push(*params);
		Ok(())
	}

	fn register_action(&mut self, action: Arc<dyn Action>) {
		self.actions.retain(|existing| existing.id() != action.id());
		self.actions.push(action);
	}

	fn unregister_action(&mut self, id: &str) -> bool {
		let before = self.actions.len();
		self.actions.retain(|existing| existing.id() != id);
		before != self.actions.len()
	}

	fn keymaps(&mut self) -> Option<&mut dyn KeymapRegistry> {
		self.keymaps
			.as_mut()
			.map(|keymaps| keymaps as &mut dyn KeymapRegistry)
	}
}
