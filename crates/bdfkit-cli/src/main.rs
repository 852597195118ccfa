use anyhow::Result;
use bdfkit::{
    render_bdf,
    table::{extract_hex_bytes, TABLE_START_MARKER, TABLE_TERMINATOR},
    BdfHeader, BitmapTable,
};
use clap::{Parser, Subcommand};
use std::{fs, path::Path};

use crate::report::stats_report;
mod report;

#[derive(Parser)]
#[command(name = "bdfkit", about = "BDF bitmap font toolkit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Report dimension statistics for a BDF font
    Stats {
        #[arg(short, long)]
        font: String,
    },
    /// Generate an 8x8 BDF font from a bitmap table embedded in a source file
    Generate {
        #[arg(short, long)]
        input: String,
        #[arg(short, long)]
        output: String,
        /// Text fragment marking the line the table starts on
        #[arg(long, default_value = TABLE_START_MARKER)]
        marker: String,
        /// Text fragment marking the line the table ends before
        #[arg(long, default_value = TABLE_TERMINATOR)]
        terminator: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Stats { font } => {
            let stats = bdfkit::stats::scan_path(Path::new(&font))?;
            println!("{}", stats_report(&stats));
        }
        Cmd::Generate {
            input,
            output,
            marker,
            terminator,
        } => {
            let source = fs::read_to_string(&input)?;
            let bytes = extract_hex_bytes(&source, &marker, &terminator);
            let table = BitmapTable::from_bytes(bytes)?;
            let document = render_bdf(&table, &BdfHeader::default());
            fs::write(&output, document)?;
            println!("Wrote {output}");
        }
    }
    Ok(())
}
