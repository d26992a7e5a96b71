//! Table-driven binding installation and teardown.
//!
//! [`install`] reconciles a host keymap registry against a keybind table:
//! stale bindings from a previous activation are removed per context
//! before fresh ones go in, so repeated activations never duplicate.
//! [`uninstall`] is best-effort; the host may have removed bindings on its
//! own in the meantime.

use indexmap::IndexMap;

use hotcycle_host::{Binding, BindingHandle, KeymapRegistry};

use crate::keybinds::Keybind;

/// Record of the bindings this plugin has installed, as
/// (context name, handle) pairs.
///
/// Explicitly owned by the plugin and lifecycled with it: populated by
/// [`install`], drained by [`uninstall`].
#[derive(Debug, Default)]
pub struct InstalledBindings {
	entries: Vec<(String, BindingHandle)>,
}

impl InstalledBindings {
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Keybinds whose firing signature already appeared earlier in the table.
/// Only the first of a colliding pair would ever fire.
fn shadowed_keybinds(keybinds: &[Keybind]) -> Vec<&Keybind> {
	let mut seen = Vec::new();
	let mut shadowed = Vec::new();
	for keybind in keybinds {
		if seen.contains(&keybind.signature()) {
			shadowed.push(keybind);
		} else {
			seen.push(keybind.signature());
		}
	}
	shadowed
}

/// Ensures the registry contains exactly one binding per keybind, and
/// returns the record of what was installed.
///
/// Contexts the registry cannot resolve are skipped without error: the
/// host's binding layer may be partial in batch runs. Colliding keybinds
/// are installed anyway but reported with a warning.
pub fn install(registry: &mut dyn KeymapRegistry, keybinds: &[Keybind]) -> InstalledBindings {
	for keybind in shadowed_keybinds(keybinds) {
		tracing::warn!(
			action = %keybind.action,
			context = %keybind.context,
			chord = %keybind.chord,
			"duplicate binding signature; only the first bind will fire"
		);
	}

	// Group by context in table order so each context is resolved once.
	let mut by_context: IndexMap<&str, Vec<&Keybind>> = IndexMap::new();
	for keybind in keybinds {
		by_context
			.entry(keybind.context.as_str())
			.or_default()
			.push(keybind);
	}

	// Stale removal matches every action id in the table, not just the ids
	// bound in the context at hand, so a bind moved between contexts by
	// configuration cannot leave its old binding behind.
	let action_ids: Vec<&str> = keybinds.iter().map(|bind| bind.action.as_str()).collect();

	let mut installed = InstalledBindings::default();
	for (context_name, binds) in by_context {
		let Some(context) = registry.context(context_name) else {
			tracing::debug!(context = context_name, "binding context unavailable, skipping");
			continue;
		};

		let removed = context.remove_by_action(&action_ids);
		if removed > 0 {
			tracing::debug!(context = context_name, removed, "removed stale bindings");
		}

		for keybind in binds {
			let handle = context.install(&Binding {
				action: keybind.action.clone(),
				chord: keybind.chord,
				trigger: keybind.trigger,
			});
			installed.entries.push((context_name.to_string(), handle));
		}
	}
	installed
}

/// Removes every recorded binding and clears the record.
///
/// Removal failures are logged and otherwise ignored; the underlying
/// binding may already have been removed externally.
pub fn uninstall(registry: &mut dyn KeymapRegistry, installed: &mut InstalledBindings) {
	for (context_name, handle) in installed.entries.drain(..) {
		let Some(context) = registry.context(&context_name) else {
			tracing::debug!(context = %context_name, "binding context gone, skipping removal");
			continue;
		};
		if let Err(error) = context.remove(handle) {
			tracing::debug!(context = %context_name, %error, "binding removal failed");
		}
	}
}
