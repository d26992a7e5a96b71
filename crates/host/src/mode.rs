//! Host interaction mode state.

/// Interaction mode of the active viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
	#[default]
	Object,
	EditMesh,
	Sculpt,
	VertexPaint,
	WeightPaint,
	TexturePaint,
}

impl InteractionMode {
	/// Returns a simple string identifier for the mode.
	pub fn name(&self) -> &'static str {
		match self {
			InteractionMode::Object => "object",
			InteractionMode::EditMesh => "edit_mesh",
			InteractionMode::Sculpt => "sculpt",
			InteractionMode::VertexPaint => "vertex_paint",
			InteractionMode::WeightPaint => "weight_paint",
			InteractionMode::TexturePaint => "texture_paint",
		}
	}
}
