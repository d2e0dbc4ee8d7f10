// appvox/src/commands/inspect.rs
//
// USE CASE: preview a CSV export (columns + sample rows).

use std::path::PathBuf;

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

pub fn execute(file: PathBuf, limit: usize) -> anyhow::Result<()> {
    if !file.exists() {
        anyhow::bail!(
            "❌ Export not found at: {}\n👉 Have you run 'appvox collect'?",
            file.display()
        );
    }

    let mut reader = csv::Reader::from_path(&file)?;
    let headers = reader.headers()?.clone();

    println!("\n🔍 Inspecting export: '{}'", file.display());
    println!(
        "   Columns: [{}]",
        headers.iter().collect::<Vec<_>>().join(", ")
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.iter());

    let mut shown = 0;
    for row in reader.records() {
        if shown >= limit {
            break;
        }
        let row = row?;
        table.add_row(row.iter());
        shown += 1;
    }

    println!("{table}");
    println!("   --- {} rows shown (limit {}) ---", shown, limit);

    Ok(())
}
