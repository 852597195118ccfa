//! BDF font statistics scanner.
//!
//! Streams a BDF document line by line and accumulates advance-width and
//! bounding-box maxima without building a glyph table. Only `ENCODING`,
//! `DWIDTH` and `BBX` records are consumed; every other line is skipped.

use crate::error::{FontError, Result};
use std::{fs, ops::RangeInclusive, path::Path};

/// Encodings whose `DWIDTH` values contribute to the ASCII average.
pub const ASCII_PRINTABLE: RangeInclusive<i32> = 32..=126;

/// Dimension statistics over one BDF document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStats {
    /// Largest horizontal advance (`DWIDTH` first value) seen.
    pub max_dwidth: i32,
    /// Largest bounding-box width (`BBX` first value) seen.
    pub max_bbx_width: i32,
    /// Largest total extent, `BBX` width plus non-negative x-offset.
    pub max_extent: i32,
    /// Mean advance over glyphs whose most recent `ENCODING` is printable
    /// ASCII. 0.0 when no such glyph exists.
    pub avg_ascii_dwidth: f64,
}

pub fn scan_path(path: &Path) -> Result<FontStats> {
    let content = fs::read_to_string(path)?;
    scan_str(&content)
}

/// Scan a BDF document in a single forward pass.
///
/// State carried between lines is the most recent `ENCODING`, consulted
/// when a `DWIDTH` record follows it. Lines are classified by their first
/// whitespace-separated token; unrecognized lines are ignored, but a
/// recognized keyword with a missing or non-numeric field is an error.
pub fn scan_str(content: &str) -> Result<FontStats> {
    let mut stats = FontStats::default();
    let mut current_encoding: Option<i32> = None;
    let mut ascii_sum: i64 = 0;
    let mut ascii_count: u32 = 0;

    for line in content.lines() {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("ENCODING") => {
                current_encoding = Some(parse_field("ENCODING", fields.next())?);
            }
            Some("DWIDTH") => {
                let dx = parse_field("DWIDTH", fields.next())?;
                stats.max_dwidth = stats.max_dwidth.max(dx);
                if current_encoding.is_some_and(|code| ASCII_PRINTABLE.contains(&code)) {
                    ascii_sum += i64::from(dx);
                    ascii_count += 1;
                }
            }
            Some("BBX") => {
                let width = parse_field("BBX", fields.next())?;
                let _height = fields.next();
                let xoff = parse_field("BBX", fields.next())?;
                stats.max_bbx_width = stats.max_bbx_width.max(width);
                stats.max_extent = stats.max_extent.max(width + xoff.max(0));
            }
            _ => {}
        }
    }

    if ascii_count > 0 {
        stats.avg_ascii_dwidth = ascii_sum as f64 / f64::from(ascii_count);
    }
    Ok(stats)
}

fn parse_field(keyword: &'static str, field: Option<&str>) -> Result<i32> {
    let token = field.ok_or(FontError::MissingField { keyword })?;
    token.parse().map_err(|_| FontError::MalformedField {
        keyword,
        token: token.to_string(),
    })
}
