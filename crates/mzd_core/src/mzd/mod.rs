mod bytes;
mod chunk;
mod error;
mod file;
mod mesh;
mod table;

/// Chunk preamble record and chunk-type dispatch.
pub use chunk::{ChunkHead, ChunkKind, FOOTER_SENTINEL, HEADER_SENTINEL, SENTINEL_LEN};
/// Error and result aliases.
pub use error::{MzdError, Result};
/// File abstraction and decode entry points.
pub use file::MzdFile;
/// Decoded mesh representation.
pub use mesh::{ATTR_COLOR, ATTR_NORMAL, ATTR_UVW, ATTR_VELOCITY, CellGroup, Mesh, PointAttribute, Shape};
/// Compressed-attribute decompression table.
pub use table::AttrTable;
