//! Extending the acronym dictionary and searching an in-memory table.
//!
//! Shows:
//! - Building a catalog from records instead of a file
//! - Merging site-specific abbreviations over the built-in ones
//! - Telling "no match" apart from "no data" with `SearchStatus`

use unspsc_search::prelude::*;

fn main() -> Result<()> {
    let catalog = Catalog::from_records([
        ("41113005", "Digital multimeters"),
        ("41113036", "Oscilloscopes"),
        ("41111720", "Scanning electron microscopes"),
    ]);

    let site = AcronymTable::from_pairs([("DMM", "digital multimeter"), ("scope", "oscilloscope")]);
    let acronyms = AcronymTable::builtin().merged(&site);
    println!("Dictionary: {} entries", acronyms.len());

    let config = SearchConfig::default();
    for query in ["dmm", "scope", "sem", "zzzz"] {
        match SearchStatus::evaluate(Ok::<_, UnspscError>(&catalog), query, &acronyms, &config) {
            SearchStatus::Matches(records) => {
                for r in records {
                    println!("{query:>6} -> {} {}", r.code(), r.description());
                }
            }
            SearchStatus::NoMatch => println!("{query:>6} -> no matches"),
            SearchStatus::NoData(reason) => println!("{query:>6} -> no data: {reason}"),
        }
    }

    // A table that failed to load reports NoData instead of an empty list.
    let missing = Catalog::load_from_path("does/not/exist.csv");
    let status = SearchStatus::evaluate(missing.as_ref(), "sem", &acronyms, &config);
    println!("missing table -> {status:?}");

    Ok(())
}
