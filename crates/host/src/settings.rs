//! Enumerated scene-level tool settings.

/// Transform pivot point for the 3D viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPoint {
	#[default]
	MedianPoint,
	Cursor,
	IndividualOrigins,
	ActiveElement,
	BoundingBoxCenter,
}

impl PivotPoint {
	/// Returns a simple string identifier for the pivot point.
	pub fn name(&self) -> &'static str {
		match self {
			PivotPoint::MedianPoint => "median_point",
			PivotPoint::Cursor => "cursor",
			PivotPoint::IndividualOrigins => "individual_origins",
			PivotPoint::ActiveElement => "active_element",
			PivotPoint::BoundingBoxCenter => "bounding_box_center",
		}
	}
}

/// Transform orientation of the active orientation slot.
///
/// The host supports more orientations than the plugin cycles through;
/// the extra values are still valid current states when cycling starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
	#[default]
	Global,
	Local,
	Normal,
	Gimbal,
	View,
	Cursor,
	Parent,
}

impl Orientation {
	/// Returns a simple string identifier for the orientation.
	pub fn name(&self) -> &'static str {
		match self {
			Orientation::Global => "global",
			Orientation::Local => "local",
			Orientation::Normal => "normal",
			Orientation::Gimbal => "gimbal",
			Orientation::View => "view",
			Orientation::Cursor => "cursor",
			Orientation::Parent => "parent",
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const PIVOTS: &[PivotPoint] = &[
		PivotPoint::MedianPoint,
		PivotPoint::Cursor,
		PivotPoint::IndividualOrigins,
		PivotPoint::ActiveElement,
		PivotPoint::BoundingBoxCenter,
	];

	const ORIENTATIONS: &[Orientation] = &[
		Orientation::Global,
		Orientation::Local,
		Orientation::Normal,
		Orientation::Gimbal,
		Orientation::View,
		Orientation::Cursor,
		Orientation::Parent,
	];

	fn assert_unique_names(names: Vec<&'static str>) {
		let mut sorted = names.clone();
		sorted.sort_unstable();
		sorted.dedup();
		assert_eq!(sorted.len(), names.len(), "duplicate name in {names:?}");
	}

	#[test]
	fn pivot_names_are_unique() {
		assert_unique_names(PIVOTS.iter().map(PivotPoint::name).collect());
	}

	#[test]
	fn orientation_names_are_unique() {
		assert_unique_names(ORIENTATIONS.iter().map(Orientation::name).collect());
	}
}
