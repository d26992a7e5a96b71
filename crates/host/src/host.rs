//! The host trait: scene settings, operators, and registration.

use std::sync::Arc;

use thiserror::Error;

use crate::action::Action;
use crate::keymap::{BindingHandle, KeymapRegistry};
use crate::mode::InteractionMode;
use crate::settings::{Orientation, PivotPoint};

/// Errors reported by the host surface.
#[derive(Debug, Error)]
pub enum HostError {
	/// A host operator was invoked but failed.
	#[error("operator '{operator}' failed: {reason}")]
	OperatorFailed {
		/// Identifier of the failing operator.
		operator: &'static str,
		/// Host-provided failure description.
		reason: String,
	},

	/// A binding handle did not resolve to an installed binding.
	#[error("binding {0:?} is not installed")]
	UnknownBinding(BindingHandle),
}

/// Parameters for the host's vertex smoothing operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothParams {
	/// Smoothing strength per repeat.
	pub factor: f32,
	/// Number of smoothing iterations.
	pub repeat: u32,
}

impl Default for SmoothParams {
	fn default() -> Self {
		// The host operator's own defaults.
		Self {
			factor: 0.5,
			repeat: 1,
		}
	}
}

/// The application hosting the plugin.
///
/// Every mutation the plugin performs goes through this trait; the plugin
/// holds no scene state of its own.
pub trait Host {
	fn pivot(&self) -> PivotPoint;
	fn set_pivot(&mut self, pivot: PivotPoint);

	/// Orientation of the active transform-orientation slot.
	fn orientation(&self) -> Orientation;
	fn set_orientation(&mut self, orientation: Orientation);

	fn mode(&self) -> InteractionMode;

	/// Invokes the built-in vertex smoothing operator on the current
	/// selection.
	fn smooth_vertices(&mut self, params: &SmoothParams) -> Result<(), HostError>;

	/// Registers an action handler, replacing any handler with the same id.
	fn register_action(&mut self, action: Arc<dyn Action>);

	/// Unregisters an action handler by id. Returns `false` if no handler
	/// with that id was registered.
	fn unregister_action(&mut self, id: &str) -> bool;

	/// The host's keymap layer, or `None` when running without interactive
	/// bindings (headless or batch runs).
	fn keymaps(&mut self) -> Option<&mut dyn KeymapRegistry>;
}
