//! Builtin keybinding table (single source of truth).

use hotcycle_host::Trigger;
use hotcycle_keyspec::{Chord, Key, Modifiers};

/// Binding context of the 3D viewport.
pub const VIEW3D_CONTEXT: &str = "view3d";
/// Binding context of mesh edit mode.
pub const MESH_CONTEXT: &str = "mesh";

/// Modifier set shared by every builtin keybind.
pub const DEFAULT_MODIFIERS: Modifiers = Modifiers {
	ctrl: true,
	alt: true,
	shift: true,
};

/// A declarative keybinding row: a chord in a named context mapped to an
/// action identifier, with a human-friendly label.
#[derive(Debug, Clone, PartialEq)]
pub struct Keybind {
	pub action: String,
	pub context: String,
	pub chord: Chord,
	pub trigger: Trigger,
	pub label: String,
}

impl Keybind {
	fn new(action: &str, context: &str, chord: Chord, label: &str) -> Self {
		Self {
			action: action.to_string(),
			context: context.to_string(),
			chord,
			trigger: Trigger::Press,
			label: label.to_string(),
		}
	}

	/// Firing signature: two keybinds sharing it collide, and only the
	/// first of them would ever fire.
	pub(crate) fn signature(&self) -> (&str, Chord, Trigger) {
		(self.context.as_str(), self.chord, self.trigger)
	}
}

/// The builtin table. Every bind uses [`DEFAULT_MODIFIERS`].
pub fn builtin_keybinds() -> Vec<Keybind> {
	vec![
		Keybind::new(
			"cycle_pivot",
			VIEW3D_CONTEXT,
			Chord::new(Key::Char('q'), DEFAULT_MODIFIERS),
			"Cycle transform pivot",
		),
		Keybind::new(
			"cycle_orientation",
			VIEW3D_CONTEXT,
			Chord::new(Key::Char('w'), DEFAULT_MODIFIERS),
			"Cycle transform orientation",
		),
		Keybind::new(
			"smooth_vertices",
			MESH_CONTEXT,
			Chord::new(Key::Char('1'), DEFAULT_MODIFIERS),
			"Smooth vertices (edit mode)",
		),
	]
}
