use std::sync::OnceLock;

use half::f16;

static SHARED: OnceLock<AttrTable> = OnceLock::new();

/// Decompression table for 16-bit-encoded per-vertex attributes.
///
/// Each of the 65536 possible codes is an IEEE 754 binary16 bit pattern; the
/// table materializes its `f32` widening once so decoding an attribute array
/// is a plain elementwise gather. The table is immutable after construction
/// and safe to share across concurrent decode calls.
pub struct AttrTable {
	entries: Box<[f32]>,
}

impl AttrTable {
	/// Number of table entries, one per 16-bit code.
	pub const LEN: usize = 1 << 16;

	/// Build the full code-to-float table.
	pub fn build() -> Self {
		let entries = (0..Self::LEN).map(|code| f16::from_bits(code as u16).to_f32()).collect();
		Self { entries }
	}

	/// Return the process-wide shared table, building it on first use.
	pub fn shared() -> &'static Self {
		SHARED.get_or_init(Self::build)
	}

	/// Decode one 16-bit attribute code.
	pub fn lookup(&self, code: u16) -> f32 {
		self.entries[usize::from(code)]
	}
}
