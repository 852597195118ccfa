//! Test support utilities for bdfkit.
//!
//! This module provides deterministic sample inputs that are useful for
//! testing and benchmarking, but are not part of the public API.

/// A full-size bitmap table with a distinct, position-dependent byte at
/// every row: glyph `i`, row `r` holds `(i * 8 + r) % 256`.
#[cfg(feature = "generate")]
pub fn patterned_table() -> Vec<u8> {
    (0..crate::table::TABLE_BYTES).map(|i| i as u8).collect()
}

/// A host source file embedding `table` the way the console font header
/// lays it out: marker line, one brace-wrapped glyph per line, closing
/// terminator.
#[cfg(feature = "generate")]
pub fn host_source(table: &[u8]) -> String {
    let mut out = String::from("static const uint8_t font8x8_basic[96][8] = {\n");
    for rows in table.chunks(crate::table::GLYPH_HEIGHT) {
        let literals: Vec<String> = rows.iter().map(|b| format!("0x{b:02X}")).collect();
        out.push_str(&format!("    {{{}}},\n", literals.join(", ")));
    }
    out.push_str("};\n");
    out
}

/// A hand-written BDF fragment with two glyphs inside the printable ASCII
/// range and one outside it.
#[cfg(feature = "stats")]
pub fn sample_bdf() -> &'static str {
    "STARTFONT 2.1\n\
     COMMENT three glyphs, mixed metrics\n\
     CHARS 3\n\
     STARTCHAR U+0041\n\
     ENCODING 65\n\
     DWIDTH 8 0\n\
     BBX 8 8 0 0\n\
     ENDCHAR\n\
     STARTCHAR U+0057\n\
     ENCODING 87\n\
     DWIDTH 10 0\n\
     BBX 9 8 2 0\n\
     ENDCHAR\n\
     STARTCHAR umlaut\n\
     ENCODING 228\n\
     DWIDTH 16 0\n\
     BBX 12 8 -1 0\n\
     ENDCHAR\n"
}
