//! BDF document rendering for the fixed 8x8 ASCII font.
//!
//! Every glyph shares the same metrics, so the header and the per-glyph
//! `SWIDTH`/`DWIDTH`/`BBX` lines are derived from [`BdfHeader`] once and
//! repeated verbatim. Readers expect properties before glyph data; the
//! document is always emitted header first, then glyphs in ascending
//! code-point order.

use crate::table::{BitmapTable, GLYPH_COUNT};

/// First code point of the fixed glyph range.
pub const FIRST_CODE_POINT: u32 = 32;
/// Last code point of the fixed glyph range (inclusive).
pub const LAST_CODE_POINT: u32 = 127;

/// Header fields of the generated font.
///
/// The XLFD font name and the properties block are rendered from these
/// fields; the defaults describe the 8x8 character-cell console font.
#[derive(Clone, Debug)]
pub struct BdfHeader {
    pub foundry: &'static str,
    pub family: &'static str,
    pub weight: &'static str,
    pub slant: &'static str,
    pub set_width: &'static str,
    /// Pixel size; also the glyph cell width and height.
    pub pixel_size: u32,
    /// Point size in decipoints.
    pub point_size: u32,
    /// Horizontal and vertical resolution in dpi.
    pub resolution: u32,
    /// XLFD spacing class, "C" for character-cell.
    pub spacing: &'static str,
    /// Average width in tenths of a pixel.
    pub average_width: u32,
    pub ascent: u32,
    pub descent: u32,
}

impl Default for BdfHeader {
    fn default() -> Self {
        Self {
            foundry: "bdfkit",
            family: "KitFont",
            weight: "Medium",
            slant: "R",
            set_width: "Normal",
            pixel_size: 8,
            point_size: 80,
            resolution: 75,
            spacing: "C",
            average_width: 80,
            ascent: 8,
            descent: 0,
        }
    }
}

impl BdfHeader {
    /// Assemble the XLFD font name from the header fields.
    pub fn xlfd(&self) -> String {
        format!(
            "-{}-{}-{}-{}-{}--{}-{}-{}-{}-{}-{}-ISO10646-1",
            self.foundry,
            self.family,
            self.weight,
            self.slant,
            self.set_width,
            self.pixel_size,
            self.point_size,
            self.resolution,
            self.resolution,
            self.spacing,
            self.average_width,
        )
    }
}

/// Symbolic glyph name for a code point.
///
/// Purely cosmetic for readers of the output; rendering does not depend
/// on it.
pub fn glyph_name(code: u32) -> String {
    match code {
        32 => "space".to_string(),
        33..=126 => format!("U+{code:04X}"),
        127 => "DEL".to_string(),
        _ => format!("GLYPH{code}"),
    }
}

/// Render a complete BDF document from a validated bitmap table.
///
/// Glyph `i` of the table becomes code point `FIRST_CODE_POINT + i`; its
/// bitmap rows are the table bytes `[8i, 8i+8)` as two uppercase hex
/// digits each.
pub fn render_bdf(table: &BitmapTable, header: &BdfHeader) -> String {
    let mut out = String::new();
    append_header(&mut out, header);
    for (index, code) in (FIRST_CODE_POINT..=LAST_CODE_POINT).enumerate() {
        append_glyph(&mut out, header, code, table.glyph_rows(index));
    }
    out
}

fn append_header(out: &mut String, header: &BdfHeader) {
    let size = header.pixel_size;
    let res = header.resolution;
    out.push_str("STARTFONT 2.1\n");
    out.push_str(&format!("FONT {}\n", header.xlfd()));
    out.push_str(&format!("SIZE {size} {res} {res}\n"));
    out.push_str(&format!("FONTBOUNDINGBOX {size} {size} 0 0\n"));
    out.push_str("STARTPROPERTIES 6\n");
    out.push_str(&format!("FAMILY_NAME \"{}\"\n", header.family));
    out.push_str(&format!("FOUNDRY \"{}\"\n", header.foundry));
    out.push_str(&format!("PIXEL_SIZE {size}\n"));
    out.push_str(&format!("FONT_ASCENT {}\n", header.ascent));
    out.push_str(&format!("FONT_DESCENT {}\n", header.descent));
    out.push_str(&format!("SPACING \"{}\"\n", header.spacing));
    out.push_str("ENDPROPERTIES\n");
    out.push_str(&format!("CHARS {GLYPH_COUNT}\n"));
}

fn append_glyph(out: &mut String, header: &BdfHeader, code: u32, rows: &[u8]) {
    let size = header.pixel_size;
    out.push_str(&format!("STARTCHAR {}\n", glyph_name(code)));
    out.push_str(&format!("ENCODING {code}\n"));
    out.push_str(&format!("SWIDTH {} 0\n", size * 100));
    out.push_str(&format!("DWIDTH {size} 0\n"));
    out.push_str(&format!("BBX {size} {size} 0 0\n"));
    out.push_str("BITMAP\n");
    for row in rows {
        out.push_str(&format!("{row:02X}\n"));
    }
    out.push_str("ENDCHAR\n");
}
