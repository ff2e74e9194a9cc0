//! Public library API for decoding MZD mesh files.

/// MZD chunk parsing, attribute decompression, and mesh assembly.
pub mod mzd;
