//! Filing history example
//!
//! Resolves a company's recent filings from its submissions document, then
//! walks the older submission pages it lists.
//!
//! Run with: `cargo run --example filing_history`

use edgar_tables::{Edgar, FilingOperations};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let edgar = Edgar::new("edgar-tables example user@example.com")?;
    let cik = "CIK0000320193";

    println!("=== Filing History Example ===\n");

    let history = edgar.submission_history(cik).await?;
    println!("✓ {} ({})", history.entity.name, cik);
    println!("✓ {} recent filings\n", history.recent.len());

    for record in history.recent.records.iter().take(10) {
        println!(
            "  {}  {:<8} {}",
            record.filing_date.as_deref().unwrap_or(""),
            record.form,
            record.accession_number
        );
    }

    println!("\nOlder pages:");
    for file in &history.files {
        // One request per page; the SEC allows at most 10 requests per second.
        let page = edgar.submission_page(&file.name).await?;
        println!(
            "  {} ({} to {}): {} filings",
            file.name,
            file.filing_from,
            file.filing_to,
            page.len()
        );
    }

    Ok(())
}
