use std::path::PathBuf;

use mzd::mzd::{Mesh, MzdFile, Result};
use serde::Serialize;

#[derive(Serialize)]
struct MeshDump<'a> {
	points: &'a [[f32; 3]],
	cells: Vec<CellDump<'a>>,
	point_data: Vec<AttrDump<'a>>,
}

#[derive(Serialize)]
struct CellDump<'a> {
	shape: &'static str,
	polygon_count: usize,
	indices: &'a [i32],
}

#[derive(Serialize)]
struct AttrDump<'a> {
	name: &'static str,
	values: &'a [[f32; 3]],
}

/// Print the decoded mesh as JSON on stdout.
pub fn run(path: PathBuf) -> Result<()> {
	let file = MzdFile::open(&path)?;
	let mesh = file.decode()?;
	let dump = dump_mesh(&mesh);

	println!("{}", serde_json::to_string_pretty(&dump).expect("mesh dump serializes"));
	Ok(())
}

fn dump_mesh(mesh: &Mesh) -> MeshDump<'_> {
	MeshDump {
		points: mesh.points(),
		cells: mesh
			.cell_groups()
			.iter()
			.map(|group| CellDump {
				shape: group.shape.as_str(),
				polygon_count: group.polygon_count(),
				indices: &group.indices,
			})
			.collect(),
		point_data: mesh
			.point_data()
			.iter()
			.map(|attr| AttrDump {
				name: attr.name,
				values: &attr.values,
			})
			.collect(),
	}
}
