use crate::mzd::bytes::Cursor;
use crate::mzd::Result;

/// Length in bytes of the header and footer sentinels and of chunk names.
pub const SENTINEL_LEN: usize = 24;

/// Fixed 24-byte sequence opening every MZD stream.
pub const HEADER_SENTINEL: [u8; SENTINEL_LEN] = *b"    MZD-File-Format    \0";

/// Fixed 24-byte sequence closing every MZD stream.
pub const FOOTER_SENTINEL: [u8; SENTINEL_LEN] = *b"   >> END OF FILE <<   \0";

/// Chunk-type dispatch derived from the 4-byte chunk identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
	/// Vertex positions and polygon connectivity (`0x0ABC0001`).
	Geometry,
	/// Per-vertex normals, table-compressed (`0xDA7A0001`).
	VertexNormals,
	/// Per-vertex motion vectors, table-compressed (`0xDA7A0002`).
	VertexMotions,
	/// Per-vertex colors, table-compressed (`0xDA7A0003`).
	VertexColors,
	/// Per-vertex UVW coordinates, raw floats (`0xDA7A0004`).
	VertexUvws,
	/// Per-node normals; carried on the wire but never decoded (`0xDA7A0011`).
	NodeNormals,
	/// Per-node colors; carried on the wire but never decoded (`0xDA7A0013`).
	NodeColors,
	/// Per-node UVWs; carried on the wire but never decoded (`0xDA7A0014`).
	NodeUvws,
	/// Any chunk identifier this decoder does not recognize.
	Other(u32),
}

impl ChunkKind {
	/// Map a raw chunk identifier to its dispatch kind.
	pub fn from_id(id: u32) -> Self {
		match id {
			0x0ABC_0001 => Self::Geometry,
			0xDA7A_0001 => Self::VertexNormals,
			0xDA7A_0002 => Self::VertexMotions,
			0xDA7A_0003 => Self::VertexColors,
			0xDA7A_0004 => Self::VertexUvws,
			0xDA7A_0011 => Self::NodeNormals,
			0xDA7A_0013 => Self::NodeColors,
			0xDA7A_0014 => Self::NodeUvws,
			other => Self::Other(other),
		}
	}

	/// Return `true` when the decoder skips this chunk by declared length.
	pub fn is_skipped(self) -> bool {
		matches!(self, Self::NodeNormals | Self::NodeColors | Self::NodeUvws | Self::Other(_))
	}
}

/// Parsed chunk preamble.
#[derive(Debug, Clone, Copy)]
pub struct ChunkHead {
	/// Chunk-type dispatch kind.
	pub kind: ChunkKind,
	/// 24-byte chunk name; carried for inspection, ignored by the decoder.
	pub name: [u8; 24],
	/// Declared payload byte length.
	///
	/// Authoritative only for skipped chunks; recognized chunks derive their
	/// extent from counts read inline.
	pub declared_len: u32,
}

impl ChunkHead {
	/// Parse a chunk preamble from cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let kind = ChunkKind::from_id(cursor.read_u32_le()?);
		let name = cursor.read_name24()?;
		let declared_len = cursor.read_u32_le()?;

		Ok(Self { kind, name, declared_len })
	}
}
