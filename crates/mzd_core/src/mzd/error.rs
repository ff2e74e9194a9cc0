use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MzdError>;

/// Errors produced while reading and decoding MZD mesh files.
///
/// Every variant is fatal: the decoder aborts on the first occurrence and
/// never returns a partially populated mesh.
#[derive(Debug, Error)]
pub enum MzdError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Stream does not begin with the MZD header sentinel.
	#[error("not an MZD stream (header sentinel mismatch)")]
	HeaderMismatch,
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Geometry chunk declared a negative vertex count.
	#[error("negative vertex count {count}")]
	NegativeVertexCount {
		/// Parsed signed vertex count.
		count: i32,
	},
	/// Polygon vertex-index entries use an unsupported byte width.
	#[error("unsupported polygon index width {width} (expected 4 or 2)")]
	UnsupportedIndexWidth {
		/// Declared bytes per index entry.
		width: u32,
	},
	/// Attribute chunk count does not match the geometry vertex count.
	#[error("attribute '{attribute}' declares {declared} entries, geometry has {expected} vertices")]
	AttributeCountMismatch {
		/// Wire name of the offending attribute.
		attribute: &'static str,
		/// Count declared by the attribute chunk.
		declared: u32,
		/// Vertex count declared by the geometry chunk.
		expected: u32,
	},
	/// Attribute chunk appeared before any geometry chunk.
	#[error("attribute '{attribute}' appeared before the geometry chunk")]
	AttributeBeforeGeometry {
		/// Wire name of the offending attribute.
		attribute: &'static str,
	},
}
