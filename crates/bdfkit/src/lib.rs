//! bdfkit: BDF bitmap font toolkit.
//! Features: dimension statistics over BDF files, 8x8 BDF generation from
//! embedded bitmap tables.

#[cfg(feature = "generate")]
pub mod bdf;
mod error;
#[cfg(feature = "stats")]
pub mod stats;
#[cfg(feature = "generate")]
pub mod table;

pub use error::{FontError, Result};

#[cfg(feature = "generate")]
pub use bdf::{glyph_name, render_bdf, BdfHeader};
#[cfg(feature = "stats")]
pub use stats::{scan_path, scan_str, FontStats};
#[cfg(feature = "generate")]
pub use table::{extract_hex_bytes, BitmapTable};

// Test utilities
pub mod test_support;
