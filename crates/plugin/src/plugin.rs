//! Plugin activation and deactivation.

use std::sync::Arc;

use hotcycle_host::{Action, Host};

use crate::actions::{CycleOrientation, CyclePivot, SmoothVertices};
use crate::keybinds::{Keybind, builtin_keybinds};
use crate::registrar::{InstalledBindings, install, uninstall};

/// Ids of the shipped actions, in registration order.
const ACTION_IDS: [&str; 3] = ["cycle_pivot", "cycle_orientation", "smooth_vertices"];

/// The hotcycle plugin: three actions plus a keybind table, registered
/// with a host on activation and fully withdrawn on deactivation.
pub struct Plugin {
	keybinds: Vec<Keybind>,
	installed: InstalledBindings,
	active: bool,
}

impl Plugin {
	/// A plugin with the builtin keybind table.
	pub fn new() -> Self {
		Self::with_keybinds(builtin_keybinds())
	}

	/// A plugin with a custom keybind table, e.g. from
	/// [`load_keybinds`](crate::load_keybinds).
	pub fn with_keybinds(keybinds: Vec<Keybind>) -> Self {
		Self {
			keybinds,
			installed: InstalledBindings::default(),
			active: false,
		}
	}

	fn actions() -> Vec<Arc<dyn Action>> {
		vec![
			Arc::new(CyclePivot),
			Arc::new(CycleOrientation),
			Arc::new(SmoothVertices),
		]
	}

	/// Registers the actions, then installs the keybinds.
	///
	/// Hosts without a keymap layer get the actions only. Activating an
	/// already-active plugin reinstalls cleanly; stale bindings are
	/// removed per context before fresh ones go in.
	pub fn activate(&mut self, host: &mut dyn Host) {
		for action in Self::actions() {
			host.register_action(action);
		}
		match host.keymaps() {
			Some(registry) => self.installed = install(registry, &self.keybinds),
			None => tracing::debug!("host has no keymap layer, keybinds not installed"),
		}
		self.active = true;
	}

	/// Uninstalls the keybinds, then unregisters the actions: the strict
	/// reverse of activation order. Safe to call when inactive.
	pub fn deactivate(&mut self, host: &mut dyn Host) {
		match host.keymaps() {
			Some(registry) => uninstall(registry, &mut self.installed),
			// The binding layer is gone; the record is stale either way.
			None => self.installed = InstalledBindings::default(),
		}
		for id in ACTION_IDS.iter().rev() {
			host.unregister_action(id);
		}
		self.active = false;
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn keybinds(&self) -> &[Keybind] {
		&self.keybinds
	}

	/// Bindings currently installed by this plugin.
	pub fn installed(&self) -> &InstalledBindings {
		&self.installed
	}
}

impl Default for Plugin {
	fn default() -> Self {
		Self::new()
	}
}
