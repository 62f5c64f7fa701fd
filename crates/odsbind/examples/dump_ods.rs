//! Example: Print every sheet of an ODS file

use odsbind::prelude::*;
use odsbind::one_line;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/test.ods".to_string());

    let doc = Document::open(&path)?;
    println!("{}: {} sheet(s)", path, doc.sheet_count());

    for sheet in doc.sheets() {
        println!(
            "\n[{}] {} rows, {} columns",
            sheet.name(),
            sheet.row_count(),
            sheet.max_column_count()
        );

        // First rows only
        for (r, row) in sheet.rows().iter().take(10).enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| one_line(&cell.to_string(), TextHandling::Escape))
                .collect();
            println!("{:>4}: {}", r + 1, cells.join(" | "));
        }
    }

    Ok(())
}
