use bdfkit::FontStats;

/// Render the four-line statistics report.
///
/// The average is formatted with `{:?}` so a whole-number mean still
/// carries a decimal point.
pub fn stats_report(stats: &FontStats) -> String {
    format!(
        "max_dw {}\nmax_bbx {}\nmax_total {}\navg_ascii_dw {:?}",
        stats.max_dwidth, stats.max_bbx_width, stats.max_extent, stats.avg_ascii_dwidth,
    )
}
