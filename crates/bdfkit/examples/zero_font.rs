use bdfkit::{render_bdf, table::TABLE_BYTES, BdfHeader, BitmapTable};

fn main() {
    // Blank 96-glyph font: every cell empty, every metric the fixed 8x8 set
    let table = BitmapTable::from_bytes(vec![0; TABLE_BYTES]).unwrap();
    print!("{}", render_bdf(&table, &BdfHeader::default()));
}
