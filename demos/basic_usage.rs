//! Basic usage example for unspsc-search
//!
//! This example demonstrates how to:
//! - Load the reference table
//! - Search by abbreviation and by free text
//! - Page through results and adjust the threshold
//! - Inspect how a query is expanded

use unspsc_search::prelude::*;

fn main() -> Result<()> {
    println!("=== UNSPSC Search Basic Usage Example ===\n");

    println!("Loading reference table...");
    let catalog = Catalog::load()?;
    let stats = catalog.stats();
    println!("✓ Loaded {} codes ({} rows skipped)\n", stats.rows, stats.skipped_rows);

    let acronyms = AcronymTable::builtin();
    let config = SearchConfig::default();

    // Example 1: abbreviation
    println!("--- Example 1: Search by abbreviation ---");
    let outcome = catalog.search("SEM", acronyms, &config);
    println!("Phase: {:?}", outcome.phase);
    for m in &outcome.matches {
        println!("{}  {}", m.code, m.description);
    }
    println!();

    // Example 2: free text with scores
    println!("--- Example 2: Fuzzy search ---");
    let outcome = catalog.search("gas chromatograph", acronyms, &config);
    for m in &outcome.matches {
        println!("{}  {:.3}  {}", m.code, m.score, m.description);
    }
    println!();

    // Example 3: second page, stricter threshold
    println!("--- Example 3: Page 2 with the strict threshold ---");
    let strict = SearchConfig::default()
        .for_page(2)
        .with_threshold(unspsc_search::STRICT_THRESHOLD);
    let outcome = catalog.search("microscope", acronyms, &strict);
    println!("{} of up to {} results", outcome.len(), strict.max_results);
    for m in &outcome.matches {
        println!("{}  {}", m.code, m.description);
    }
    println!();

    // Example 4: query variants
    println!("--- Example 4: Query expansion ---");
    for variant in expand_query("UV-Vis", acronyms) {
        println!("- {variant}");
    }
    println!();

    // Example 5: exact lookup
    println!("--- Example 5: Lookup by code ---");
    match catalog.find_by_code("41111720") {
        Some(r) => println!("{} is {}", r.code(), r.description()),
        None => println!("41111720 is not in this table"),
    }

    Ok(())
}
