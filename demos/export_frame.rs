//! Frame export example
//!
//! Fetches one frame (every company's latest value for a concept in a period)
//! and writes it to a CSV file.
//!
//! Run with: `cargo run --example export_frame --features csv`

use edgar_tables::{CompanyOperations, Edgar};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let edgar = Edgar::new("edgar-tables example user@example.com")?;

    println!("=== Frame Export Example ===\n");

    let (taxonomy, tag, unit, period) = ("us-gaap", "AccountsPayableCurrent", "USD", "CY2019Q1I");
    println!("Fetching {taxonomy}/{tag}/{unit} for {period}...");
    let frame = edgar.frames(taxonomy, tag, unit, period).await?;
    println!("✓ {} companies reported a value\n", frame.len());

    for row in frame.iter().take(5) {
        println!(
            "  {:<40} {:>16}",
            row.get("entityName").map(ToString::to_string).unwrap_or_default(),
            row.get("val").map(ToString::to_string).unwrap_or_default()
        );
    }

    let path = format!("{tag}-{period}.csv");
    frame.save_csv(&path)?;
    println!("\n✓ Wrote {} rows to {}", frame.len(), path);

    Ok(())
}
