/// Wire name of the per-vertex normal attribute.
pub const ATTR_NORMAL: &str = "normal";
/// Wire name of the per-vertex motion-vector attribute.
pub const ATTR_VELOCITY: &str = "velocity";
/// Wire name of the per-vertex color attribute.
pub const ATTR_COLOR: &str = "color";
/// Wire name of the per-vertex UVW-coordinate attribute.
pub const ATTR_UVW: &str = "uvw_map";

/// Polygon shape classified by arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// Three vertices per polygon.
	Triangle,
	/// Four vertices per polygon.
	Quad,
}

impl Shape {
	/// Classify a nodes-per-polygon value; arities outside {3, 4} are
	/// unsupported by the format mapping.
	pub fn from_arity(arity: u8) -> Option<Self> {
		match arity {
			3 => Some(Self::Triangle),
			4 => Some(Self::Quad),
			_ => None,
		}
	}

	/// Number of vertex indices per polygon of this shape.
	pub fn arity(self) -> usize {
		match self {
			Self::Triangle => 3,
			Self::Quad => 4,
		}
	}

	/// Stable lowercase shape name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Triangle => "triangle",
			Self::Quad => "quad",
		}
	}
}

/// One block of same-arity polygons.
#[derive(Debug, Clone)]
pub struct CellGroup {
	/// Shape shared by every polygon in this group.
	pub shape: Shape,
	/// Flat vertex indices, `arity` entries per polygon, in stream order.
	pub indices: Vec<i32>,
}

impl CellGroup {
	/// Number of polygons in this group.
	pub fn polygon_count(&self) -> usize {
		self.indices.len() / self.shape.arity()
	}

	/// Iterate polygons as `arity`-wide index rows.
	pub fn polygons(&self) -> impl Iterator<Item = &[i32]> {
		self.indices.chunks_exact(self.shape.arity())
	}
}

/// One named per-vertex attribute array.
#[derive(Debug, Clone)]
pub struct PointAttribute {
	/// Wire attribute name (`normal`, `velocity`, `color`, or `uvw_map`).
	pub name: &'static str,
	/// Three decoded components per vertex.
	pub values: Vec<[f32; 3]>,
}

/// Decoded MZD mesh: vertex positions, polygon index groups keyed by shape
/// name, and named per-vertex attribute arrays.
///
/// Built once at the end of a successful decode and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
	points: Vec<[f32; 3]>,
	cells: Vec<CellGroup>,
	point_data: Vec<PointAttribute>,
}

impl Mesh {
	pub(crate) fn new(points: Vec<[f32; 3]>, cells: Vec<CellGroup>, point_data: Vec<PointAttribute>) -> Self {
		Self { points, cells, point_data }
	}

	/// Vertex positions, one `[x, y, z]` triple per vertex.
	pub fn points(&self) -> &[[f32; 3]] {
		&self.points
	}

	/// All polygon index groups in stream order of first appearance.
	pub fn cell_groups(&self) -> &[CellGroup] {
		&self.cells
	}

	/// Look up a polygon index group by shape name.
	pub fn cell_group(&self, name: &str) -> Option<&CellGroup> {
		self.cells.iter().find(|group| group.shape.as_str() == name)
	}

	/// All per-vertex attribute arrays in stream order of first appearance.
	pub fn point_data(&self) -> &[PointAttribute] {
		&self.point_data
	}

	/// Look up a per-vertex attribute array by name.
	pub fn attribute(&self, name: &str) -> Option<&[[f32; 3]]> {
		self.point_data.iter().find(|attr| attr.name == name).map(|attr| attr.values.as_slice())
	}
}
