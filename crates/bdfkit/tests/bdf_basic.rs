use bdfkit::{
    bdf::{glyph_name, render_bdf, BdfHeader},
    table::TABLE_BYTES,
    test_support::patterned_table,
    BitmapTable,
};
use pretty_assertions::assert_eq;

fn render(bytes: Vec<u8>) -> String {
    let table = BitmapTable::from_bytes(bytes).expect("table");
    render_bdf(&table, &BdfHeader::default())
}

#[test]
fn header_block_is_emitted_before_glyphs() {
    let doc = render(vec![0; TABLE_BYTES]);
    let header: Vec<&str> = doc.lines().take(14).collect();
    assert_eq!(
        header,
        vec![
            "STARTFONT 2.1",
            "FONT -bdfkit-KitFont-Medium-R-Normal--8-80-75-75-C-80-ISO10646-1",
            "SIZE 8 75 75",
            "FONTBOUNDINGBOX 8 8 0 0",
            "STARTPROPERTIES 6",
            "FAMILY_NAME \"KitFont\"",
            "FOUNDRY \"bdfkit\"",
            "PIXEL_SIZE 8",
            "FONT_ASCENT 8",
            "FONT_DESCENT 0",
            "SPACING \"C\"",
            "ENDPROPERTIES",
            "CHARS 96",
            "STARTCHAR space",
        ]
    );
}

#[test]
fn document_contains_96_glyph_blocks() {
    let doc = render(vec![0; TABLE_BYTES]);
    assert_eq!(doc.lines().filter(|l| l.starts_with("STARTCHAR")).count(), 96);
    assert_eq!(doc.lines().filter(|l| *l == "ENDCHAR").count(), 96);
}

#[test]
fn encodings_form_the_sequence_32_to_127() {
    let doc = render(vec![0; TABLE_BYTES]);
    let encodings: Vec<u32> = doc
        .lines()
        .filter_map(|l| l.strip_prefix("ENCODING "))
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(encodings, (32..=127).collect::<Vec<u32>>());
}

#[test]
fn zero_table_renders_all_zero_rows() {
    let doc = render(vec![0; TABLE_BYTES]);
    assert_eq!(doc.lines().filter(|l| *l == "00").count(), 768);
    assert!(doc.contains("STARTCHAR space\nENCODING 32\n"));
    assert!(doc.contains("STARTCHAR U+0041\nENCODING 65\n"));
    assert!(doc.contains("STARTCHAR DEL\nENCODING 127\n"));
}

#[test]
fn glyph_metrics_are_constant() {
    let doc = render(vec![0; TABLE_BYTES]);
    assert_eq!(doc.lines().filter(|l| *l == "SWIDTH 800 0").count(), 96);
    assert_eq!(doc.lines().filter(|l| *l == "DWIDTH 8 0").count(), 96);
    assert_eq!(doc.lines().filter(|l| *l == "BBX 8 8 0 0").count(), 96);
}

#[test]
fn glyph_rows_come_from_the_matching_table_slice() {
    let doc = render(patterned_table());
    // Glyph index 5 is code point 37; its rows are bytes 40..48
    let block_start = doc.find("STARTCHAR U+0025\n").expect("glyph block");
    let block = &doc[block_start..];
    let rows: Vec<&str> = block
        .lines()
        .skip_while(|l| *l != "BITMAP")
        .skip(1)
        .take_while(|l| *l != "ENDCHAR")
        .collect();
    assert_eq!(rows, vec!["28", "29", "2A", "2B", "2C", "2D", "2E", "2F"]);
}

#[test]
fn bitmap_rows_are_two_uppercase_hex_digits() {
    let doc = render(patterned_table());
    let mut in_bitmap = false;
    for line in doc.lines() {
        match line {
            "BITMAP" => in_bitmap = true,
            "ENDCHAR" => in_bitmap = false,
            row if in_bitmap => {
                assert_eq!(row.len(), 2);
                assert!(row.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
            }
            _ => {}
        }
    }
}

#[test]
fn bitmap_rows_round_trip_to_the_input_table() {
    let bytes = patterned_table();
    let doc = render(bytes.clone());
    let mut recovered = Vec::new();
    let mut in_bitmap = false;
    for line in doc.lines() {
        match line {
            "BITMAP" => in_bitmap = true,
            "ENDCHAR" => in_bitmap = false,
            row if in_bitmap => recovered.push(u8::from_str_radix(row, 16).unwrap()),
            _ => {}
        }
    }
    assert_eq!(recovered, bytes);
}

#[test]
fn generated_document_scans_back_through_the_stats_pipeline() {
    let doc = render(patterned_table());
    let stats = bdfkit::stats::scan_str(&doc).unwrap();
    assert_eq!(stats.max_dwidth, 8);
    assert_eq!(stats.max_bbx_width, 8);
    assert_eq!(stats.max_extent, 8);
    // 95 of the 96 glyphs are printable ASCII; DEL (127) is excluded
    assert_eq!(stats.avg_ascii_dwidth, 8.0);
}

#[test]
fn glyph_names_follow_the_naming_rules() {
    assert_eq!(glyph_name(32), "space");
    assert_eq!(glyph_name(33), "U+0021");
    assert_eq!(glyph_name(65), "U+0041");
    assert_eq!(glyph_name(126), "U+007E");
    assert_eq!(glyph_name(127), "DEL");
}

#[test]
fn document_does_not_declare_an_endfont_trailer() {
    let doc = render(vec![0; TABLE_BYTES]);
    assert!(doc.ends_with("ENDCHAR\n"));
    assert!(!doc.contains("ENDFONT"));
}
