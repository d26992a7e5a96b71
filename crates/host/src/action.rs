//! The action capability: a host-invocable unit of behavior.

use thiserror::Error;

use crate::host::{Host, HostError};

/// Result of executing an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
	/// The action ran and mutated host state as intended.
	Finished,
	/// The action deliberately did nothing; carries a user-facing
	/// explanation (e.g. wrong interaction mode).
	Warning(String),
}

/// Error from executing an action.
#[derive(Debug, Error)]
pub enum ActionError {
	#[error(transparent)]
	Host(#[from] HostError),
}

/// A host-invocable action: an identifier, a human label, and an execute
/// operation over the host surface.
pub trait Action {
	/// Stable identifier used by keybinds and registration.
	fn id(&self) -> &'static str;

	/// Human-readable label.
	fn label(&self) -> &'static str;

	/// Executes the action against the host.
	fn execute(&self, host: &mut dyn Host) -> Result<Outcome, ActionError>;
}
