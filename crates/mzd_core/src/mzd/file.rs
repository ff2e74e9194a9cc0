use std::fs;
use std::path::Path;

use crate::mzd::bytes::Cursor;
use crate::mzd::chunk::{ChunkHead, ChunkKind, FOOTER_SENTINEL, HEADER_SENTINEL, SENTINEL_LEN};
use crate::mzd::mesh::{ATTR_COLOR, ATTR_NORMAL, ATTR_UVW, ATTR_VELOCITY, CellGroup, Mesh, PointAttribute, Shape};
use crate::mzd::{AttrTable, MzdError, Result};

/// Opened MZD container holding the raw stream bytes.
///
/// Decoding is single-pass and synchronous; one `MzdFile` can be decoded any
/// number of times and holds no state between calls.
pub struct MzdFile {
	bytes: Vec<u8>,
}

impl MzdFile {
	/// Read an MZD file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Ok(Self { bytes: fs::read(path)? })
	}

	/// Wrap an in-memory MZD stream.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Return the raw bytes backing this file.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the stream into a mesh using the process-wide attribute table.
	pub fn decode(&self) -> Result<Mesh> {
		self.decode_with(AttrTable::shared())
	}

	/// Decode the stream into a mesh using a caller-supplied attribute table.
	pub fn decode_with(&self, table: &AttrTable) -> Result<Mesh> {
		decode_stream(&self.bytes, table)
	}
}

fn decode_stream(bytes: &[u8], table: &AttrTable) -> Result<Mesh> {
	let mut cursor = Cursor::new(bytes);
	if cursor.read_exact(SENTINEL_LEN)? != HEADER_SENTINEL {
		return Err(MzdError::HeaderMismatch);
	}

	let mut vertex_count: Option<u32> = None;
	let mut points: Vec<[f32; 3]> = Vec::new();
	let mut cells: Vec<CellGroup> = Vec::new();
	let mut point_data: Vec<PointAttribute> = Vec::new();

	loop {
		// Probe for the footer without committing the cursor; on mismatch the
		// same bytes are the start of the next chunk preamble.
		if cursor.peek_exact(SENTINEL_LEN)? == FOOTER_SENTINEL {
			break;
		}

		let head = ChunkHead::parse(&mut cursor)?;
		match head.kind {
			ChunkKind::Geometry => {
				let declared = cursor.read_i32_le()?;
				if declared < 0 {
					return Err(MzdError::NegativeVertexCount { count: declared });
				}
				if declared == 0 {
					// Early non-error stop; keep whatever has accumulated.
					break;
				}

				let count = declared as u32;
				vertex_count = Some(count);
				points = read_f32x3(&mut cursor, count as usize)?;
				cells = read_cells(&mut cursor)?;
			}
			ChunkKind::VertexNormals => {
				let count = read_attr_count(&mut cursor, vertex_count, ATTR_NORMAL)?;
				let values = read_packed3(&mut cursor, count as usize, table)?;
				set_attr(&mut point_data, ATTR_NORMAL, values);
			}
			ChunkKind::VertexMotions => {
				let count = read_attr_count(&mut cursor, vertex_count, ATTR_VELOCITY)?;
				let values = read_packed3(&mut cursor, count as usize, table)?;
				set_attr(&mut point_data, ATTR_VELOCITY, values);
			}
			ChunkKind::VertexColors => {
				let count = read_attr_count(&mut cursor, vertex_count, ATTR_COLOR)?;
				let values = read_packed4_truncated(&mut cursor, count as usize, table)?;
				set_attr(&mut point_data, ATTR_COLOR, values);
			}
			ChunkKind::VertexUvws => {
				let count = read_attr_count(&mut cursor, vertex_count, ATTR_UVW)?;
				let values = read_f32x3(&mut cursor, count as usize)?;
				set_attr(&mut point_data, ATTR_UVW, values);
			}
			ChunkKind::NodeNormals | ChunkKind::NodeColors | ChunkKind::NodeUvws | ChunkKind::Other(_) => {
				cursor.skip(head.declared_len as usize)?;
			}
		}
	}

	Ok(Mesh::new(points, cells, point_data))
}

/// Read `count` packed `3 x f32` rows; used for vertex positions and for the
/// raw (untabled) UVW attribute.
fn read_f32x3(cursor: &mut Cursor<'_>, count: usize) -> Result<Vec<[f32; 3]>> {
	let raw = cursor.read_exact(count * 12)?;
	Ok(raw
		.chunks_exact(12)
		.map(|row| {
			[
				f32::from_le_bytes([row[0], row[1], row[2], row[3]]),
				f32::from_le_bytes([row[4], row[5], row[6], row[7]]),
				f32::from_le_bytes([row[8], row[9], row[10], row[11]]),
			]
		})
		.collect())
}

fn read_cells(cursor: &mut Cursor<'_>) -> Result<Vec<CellGroup>> {
	let polygon_count = cursor.read_u32_le()? as usize;
	let arities = cursor.read_exact(polygon_count)?.to_vec();
	let total: usize = arities.iter().map(|&arity| usize::from(arity)).sum();

	let width = cursor.read_u32_le()?;
	let indices: Vec<i32> = match width {
		4 => cursor
			.read_exact(total * 4)?
			.chunks_exact(4)
			.map(|raw| i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
			.collect(),
		2 => cursor
			.read_exact(total * 2)?
			.chunks_exact(2)
			.map(|raw| i32::from(u16::from_le_bytes([raw[0], raw[1]])))
			.collect(),
		other => return Err(MzdError::UnsupportedIndexWidth { width: other }),
	};

	Ok(group_cells(&arities, &indices))
}

/// Partition the flat index array into per-shape groups.
///
/// The arity sequence is scanned as maximal contiguous runs; runs of the same
/// arity separated by other shapes merge into one group, appended in stream
/// order. Runs with an arity outside the shape mapping are consumed and
/// dropped rather than treated as errors.
fn group_cells(arities: &[u8], indices: &[i32]) -> Vec<CellGroup> {
	let mut groups: Vec<CellGroup> = Vec::new();
	let mut offset = 0;
	let mut at = 0;

	while at < arities.len() {
		let arity = arities[at];
		let mut run = 1;
		while at + run < arities.len() && arities[at + run] == arity {
			run += 1;
		}

		let span = usize::from(arity) * run;
		let slice = &indices[offset..offset + span];
		if let Some(shape) = Shape::from_arity(arity) {
			match groups.iter_mut().find(|group| group.shape == shape) {
				Some(group) => group.indices.extend_from_slice(slice),
				None => groups.push(CellGroup { shape, indices: slice.to_vec() }),
			}
		}

		offset += span;
		at += run;
	}

	groups
}

fn read_attr_count(cursor: &mut Cursor<'_>, vertex_count: Option<u32>, attribute: &'static str) -> Result<u32> {
	let declared = cursor.read_u32_le()?;
	let Some(expected) = vertex_count else {
		return Err(MzdError::AttributeBeforeGeometry { attribute });
	};
	if declared != expected {
		return Err(MzdError::AttributeCountMismatch { attribute, declared, expected });
	}
	Ok(declared)
}

fn read_packed3(cursor: &mut Cursor<'_>, count: usize, table: &AttrTable) -> Result<Vec<[f32; 3]>> {
	let raw = cursor.read_exact(count * 6)?;
	Ok(raw
		.chunks_exact(6)
		.map(|row| {
			[
				table.lookup(u16::from_le_bytes([row[0], row[1]])),
				table.lookup(u16::from_le_bytes([row[2], row[3]])),
				table.lookup(u16::from_le_bytes([row[4], row[5]])),
			]
		})
		.collect())
}

fn read_packed4_truncated(cursor: &mut Cursor<'_>, count: usize, table: &AttrTable) -> Result<Vec<[f32; 3]>> {
	let raw = cursor.read_exact(count * 8)?;
	Ok(raw
		.chunks_exact(8)
		.map(|row| {
			// The fourth code is decoded but not retained; the output stays
			// three components wide.
			let _ = table.lookup(u16::from_le_bytes([row[6], row[7]]));
			[
				table.lookup(u16::from_le_bytes([row[0], row[1]])),
				table.lookup(u16::from_le_bytes([row[2], row[3]])),
				table.lookup(u16::from_le_bytes([row[4], row[5]])),
			]
		})
		.collect())
}

fn set_attr(point_data: &mut Vec<PointAttribute>, name: &'static str, values: Vec<[f32; 3]>) {
	match point_data.iter_mut().find(|attr| attr.name == name) {
		Some(attr) => attr.values = values,
		None => point_data.push(PointAttribute { name, values }),
	}
}
