use std::path::PathBuf;

use mzd::mzd::{MzdFile, Result};

/// Print high-level mesh statistics for one MZD file.
pub fn run(path: PathBuf) -> Result<()> {
	let file = MzdFile::open(&path)?;
	let mesh = file.decode()?;

	println!("path: {}", path.display());
	println!("file_bytes: {}", file.bytes().len());
	println!("point_count: {}", mesh.points().len());

	println!("cells:");
	for group in mesh.cell_groups() {
		println!("  {}: {}", group.shape.as_str(), group.polygon_count());
	}

	println!("point_data:");
	for attr in mesh.point_data() {
		println!("  {}: {}", attr.name, attr.values.len());
	}

	Ok(())
}
