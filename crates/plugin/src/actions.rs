//! The shipped actions and their cycle orders.

use hotcycle_host::{
	Action, ActionError, Host, InteractionMode, Orientation, Outcome, PivotPoint, SmoothParams,
};

use crate::cycle::Cycle;

/// Pivot cycle order.
pub const PIVOT_ORDER: Cycle<PivotPoint> = Cycle::new(&[
	PivotPoint::MedianPoint,
	PivotPoint::Cursor,
	PivotPoint::IndividualOrigins,
	PivotPoint::ActiveElement,
	PivotPoint::BoundingBoxCenter,
]);

/// Orientation cycle order.
///
/// Deliberately a subset of the host's orientations; cycling from one of
/// the others (normal, gimbal, parent) restarts at global.
pub const ORIENTATION_ORDER: Cycle<Orientation> = Cycle::new(&[
	Orientation::Global,
	Orientation::Local,
	Orientation::View,
	Orientation::Cursor,
]);

/// Advances the transform pivot point to the next value in
/// [`PIVOT_ORDER`].
pub struct CyclePivot;

impl Action for CyclePivot {
	fn id(&self) -> &'static str {
		"cycle_pivot"
	}

	fn label(&self) -> &'static str {
		"Cycle transform pivot"
	}

	fn execute(&self, host: &mut dyn Host) -> Result<Outcome, ActionError> {
		host.set_pivot(PIVOT_ORDER.advance(host.pivot()));
		Ok(Outcome::Finished)
	}
}

/// Advances the active transform orientation to the next value in
/// [`ORIENTATION_ORDER`].
pub struct CycleOrientation;

impl Action for CycleOrientation {
	fn id(&self) -> &'static str {
		"cycle_orientation"
	}

	fn label(&self) -> &'static str {
		"Cycle transform orientation"
	}

	fn execute(&self, host: &mut dyn Host) -> Result<Outcome, ActionError> {
		host.set_orientation(ORIENTATION_ORDER.advance(host.orientation()));
		Ok(Outcome::Finished)
	}
}

/// Smooths the selected vertices with the host operator's default
/// parameters. Requires edit-mesh mode; elsewhere it warns and does
/// nothing.
pub struct SmoothVertices;

impl Action for SmoothVertices {
	fn id(&self) -> &'static str {
		"smooth_vertices"
	}

	fn label(&self) -> &'static str {
		"Smooth vertices"
	}

	fn execute(&self, host: &mut dyn Host) -> Result<Outcome, ActionError> {
		if host.mode() != InteractionMode::EditMesh {
			return Ok(Outcome::Warning("vertex smoothing requires edit mode".to_string()));
		}
		host.smooth_vertices(&SmoothParams::default())?;
		Ok(Outcome::Finished)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use hotcycle_host::MemoryHost;

	use super::*;

	#[test]
	fn pivot_cycles_through_all_five_values_and_wraps() {
		let mut host = MemoryHost::new();
		assert_eq!(host.pivot(), PivotPoint::MedianPoint);

		let expected = [
			PivotPoint::Cursor,
			PivotPoint::IndividualOrigins,
			PivotPoint::ActiveElement,
			PivotPoint::BoundingBoxCenter,
			PivotPoint::MedianPoint,
		];
		for pivot in expected {
			CyclePivot.execute(&mut host).unwrap();
			assert_eq!(host.pivot(), pivot);
		}
	}

	#[test]
	fn orientation_outside_the_cycle_restarts_at_global() {
		let mut host = MemoryHost::new();
		host.set_orientation(Orientation::Gimbal);
		CycleOrientation.execute(&mut host).unwrap();
		assert_eq!(host.orientation(), Orientation::Global);
	}

	#[test]
	fn orientation_cycle_skips_the_uncycled_values() {
		let mut host = MemoryHost::new();
		for _ in 0..ORIENTATION_ORDER.options().len() * 2 {
			CycleOrientation.execute(&mut host).unwrap();
			assert!(ORIENTATION_ORDER.options().contains(&host.orientation()));
		}
	}

	#[test]
	fn smoothing_outside_edit_mode_warns_and_does_nothing() {
		let mut host = MemoryHost::new();
		assert_eq!(host.mode(), InteractionMode::Object);

		let outcome = SmoothVertices.execute(&mut host).unwrap();
		assert!(matches!(outcome, Outcome::Warning(_)));
		assert!(host.smooth_calls().is_empty());
	}

	#[test]
	fn actions_carry_ids_and_labels() {
		let actions: [&dyn Action; 3] = [&CyclePivot, &CycleOrientation, &SmoothVertices];
		for action in actions {
			assert!(!action.id().is_empty());
			assert!(!action.label().is_empty());
		}
	}

	#[test]
	fn smoothing_in_edit_mode_invokes_the_operator_once() {
		let mut host = MemoryHost::new();
		host.set_mode(InteractionMode::EditMesh);

		let outcome = SmoothVertices.execute(&mut host).unwrap();
		assert_eq!(outcome, Outcome::Finished);
		assert_eq!(host.smooth_calls(), &[SmoothParams::default()]);
	}
}
