//! Keybind configuration parsing.
//!
//! A KDL `keybinds { }` node remaps builtin keybinds per action id. Each
//! child node names an action, its first argument is the chord, and an
//! optional `context` property moves the bind to another binding context:
//!
//! ```kdl
//! keybinds {
//!     cycle_pivot "ctrl-alt-shift-p"
//!     smooth_vertices "ctrl-alt-shift-s" context="view3d"
//! }
//! ```

use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlNode};
use thiserror::Error;

use hotcycle_keyspec::ParseError;

use crate::keybinds::{Keybind, builtin_keybinds};

/// Errors that can occur when loading keybind configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A keybind node has no chord argument.
	#[error("keybind for '{0}' is missing a chord argument")]
	MissingChord(String),

	/// A chord string could not be parsed.
	#[error("invalid chord '{chord}' for '{action}': {error}")]
	InvalidChord {
		/// Action id the chord was declared for.
		action: String,
		/// The offending chord string.
		chord: String,
		/// The underlying parse error.
		error: ParseError,
	},

	/// An action id not present in the keybind table.
	#[error("unknown action: {action}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownAction {
		/// The unrecognized action id.
		action: String,
		/// A suggested alternative, if one is close enough.
		suggestion: Option<String>,
	},
}

/// Loads the builtin keybind table with a KDL file's `keybinds { }` node
/// applied on top. A file without that node yields the builtin table.
pub fn load_keybinds(path: &Path) -> Result<Vec<Keybind>, ConfigError> {
	let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let doc: KdlDocument = text.parse()?;

	let mut keybinds = builtin_keybinds();
	if let Some(node) = doc.get("keybinds") {
		apply_overrides(&mut keybinds, node)?;
	}
	Ok(keybinds)
}

/// Applies a `keybinds { }` node on top of a keybind table, rebinding the
/// chord (and optionally the context) of each named action.
pub fn apply_overrides(keybinds: &mut [Keybind], node: &KdlNode) -> Result<(), ConfigError> {
	let Some(children) = node.children() else {
		return Ok(());
	};

	for bind_node in children.nodes() {
		let action = bind_node.name().value();
		let Some(index) = keybinds.iter().position(|keybind| keybind.action == action) else {
			return Err(ConfigError::UnknownAction {
				action: action.to_string(),
				suggestion: suggest_action(action, keybinds),
			});
		};

		let chord_str = bind_node
			.get(0)
			.and_then(|value| value.as_string())
			.ok_or_else(|| ConfigError::MissingChord(action.to_string()))?;
		keybinds[index].chord = chord_str.parse().map_err(|error| ConfigError::InvalidChord {
			action: action.to_string(),
			chord: chord_str.to_string(),
			error,
		})?;

		if let Some(context) = bind_node.get("context").and_then(|value| value.as_string()) {
			keybinds[index].context = context.to_string();
		}
	}
	Ok(())
}

/// Closest known action id, if it is close enough to be a likely typo.
fn suggest_action(action: &str, keybinds: &[Keybind]) -> Option<String> {
	keybinds
		.iter()
		.map(|keybind| {
			let candidate = keybind.action.as_str();
			(strsim::jaro_winkler(action, candidate), candidate)
		})
		.filter(|(score, _)| *score > 0.7)
		.max_by(|(a, _), (b, _)| a.total_cmp(b))
		.map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use hotcycle_keyspec::Chord;

	use super::*;
	use crate::keybinds::{MESH_CONTEXT, VIEW3D_CONTEXT};

	fn overridden(kdl: &str) -> Result<Vec<Keybind>, ConfigError> {
		let doc: KdlDocument = kdl.parse().unwrap();
		let mut keybinds = builtin_keybinds();
		apply_overrides(&mut keybinds, doc.get("keybinds").unwrap())?;
		Ok(keybinds)
	}

	fn bind_for<'a>(keybinds: &'a [Keybind], action: &str) -> &'a Keybind {
		keybinds
			.iter()
			.find(|keybind| keybind.action == action)
			.unwrap()
	}

	#[test]
	fn overrides_chord_keeping_context() {
		let keybinds = overridden(
			r#"
keybinds {
    cycle_pivot "ctrl-alt-shift-p"
}
"#,
		)
		.unwrap();

		let pivot = bind_for(&keybinds, "cycle_pivot");
		assert_eq!(
			pivot.chord,
			Chord::char('p').with_ctrl().with_alt().with_shift()
		);
		assert_eq!(pivot.context, VIEW3D_CONTEXT);
		// Untouched binds keep their builtin chords.
		assert_eq!(keybinds, {
			let mut expected = builtin_keybinds();
			expected[0].chord = Chord::char('p').with_ctrl().with_alt().with_shift();
			expected
		});
	}

	#[test]
	fn overrides_context_via_property() {
		let keybinds = overridden(
			r#"
keybinds {
    smooth_vertices "ctrl-alt-shift-s" context="view3d"
}
"#,
		)
		.unwrap();

		let smooth = bind_for(&keybinds, "smooth_vertices");
		assert_eq!(smooth.context, VIEW3D_CONTEXT);
		assert_ne!(smooth.context, MESH_CONTEXT);
	}

	#[test]
	fn unknown_action_suggests_the_closest_id() {
		let err = overridden(
			r#"
keybinds {
    cycle_pivots "ctrl-alt-shift-p"
}
"#,
		)
		.unwrap_err();

		match err {
			ConfigError::UnknownAction { action, suggestion } => {
				assert_eq!(action, "cycle_pivots");
				assert_eq!(suggestion.as_deref(), Some("cycle_pivot"));
			}
			other => panic!("expected UnknownAction, got {other:?}"),
		}
	}

	#[test]
	fn missing_chord_argument_errors() {
		let err = overridden("keybinds {\n    cycle_pivot\n}").unwrap_err();
		assert!(matches!(err, ConfigError::MissingChord(action) if action == "cycle_pivot"));
	}

	#[test]
	fn invalid_chord_reports_the_offending_string() {
		let err = overridden(
			r#"
keybinds {
    cycle_orientation "ctrl-ctrl-w"
}
"#,
		)
		.unwrap_err();

		match err {
			ConfigError::InvalidChord { action, chord, .. } => {
				assert_eq!(action, "cycle_orientation");
				assert_eq!(chord, "ctrl-ctrl-w");
			}
			other => panic!("expected InvalidChord, got {other:?}"),
		}
	}

	#[test]
	fn load_keybinds_reads_a_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("hotcycle.kdl");
		std::fs::write(&path, "keybinds {\n    cycle_pivot \"ctrl-f5\"\n}").unwrap();

		let keybinds = load_keybinds(&path).unwrap();
		assert_eq!(
			bind_for(&keybinds, "cycle_pivot").chord.to_string(),
			"ctrl-f5"
		);
	}

	#[test]
	fn load_keybinds_missing_file_is_an_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = load_keybinds(&dir.path().join("absent.kdl")).unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));
	}
}
