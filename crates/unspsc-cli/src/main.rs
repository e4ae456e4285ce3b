//! unspsc-cli: command-line interface for unspsc-core
//!
//! Look up UNSPSC classification codes from the terminal: search by
//! free text or abbreviation, inspect how a query is expanded, browse the
//! acronym dictionary, fetch a single code and print table statistics.
//!
//! Usage examples
//! --------------
//!
//! - Search by abbreviation or description
//!   $ unspsc-cli search SEM
//!   $ unspsc-cli search gas chromatograph --scores
//!
//! - Show more results (five per page)
//!   $ unspsc-cli search microscope --page 2
//!
//! - See the variants a query is scored with
//!   $ unspsc-cli expand "UV-Vis"
//!
//! - Show one code
//!   $ unspsc-cli code 41111720
//!
//! Data source
//! -----------
//!
//! Without `--input`, the reference table is resolved from `$UNSPSC_DATA`
//! and then the standard data directories (see `Catalog::candidate_paths`).
//! `--acronyms <file.json>` merges extra abbreviations over the built-in
//! dictionary.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use unspsc_core::text::contains_folded;
use unspsc_core::{
    expand_query, AcronymTable, Catalog, CodeSearch, SearchConfig, SearchOutcome, PAGE_SIZE,
};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let acronyms = load_acronyms(args.acronyms.as_deref())?;

    match args.command {
        Commands::Search {
            query,
            max,
            page,
            threshold,
            timeout_ms,
            scores,
            json,
        } => {
            let query = query.join(" ");
            let mut config = match (max, page) {
                (Some(n), _) => SearchConfig::default().with_max_results(n),
                (None, Some(p)) => SearchConfig::default().for_page(p),
                (None, None) => SearchConfig::default(),
            };
            if let Some(t) = threshold {
                anyhow::ensure!(
                    (0.0..=1.0).contains(&t),
                    "--threshold must be between 0.0 and 1.0 (got {t})"
                );
                config = config.with_threshold(t);
            }
            if let Some(ms) = timeout_ms {
                config = config.with_timeout(Duration::from_millis(ms));
            }

            let catalog = load_catalog(args.input.as_deref())?;
            let outcome = catalog.search(&query, &acronyms, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&outcome, &config, page.unwrap_or(1), scores);
            }
        }

        Commands::Expand { query } => {
            for variant in expand_query(&query.join(" "), &acronyms) {
                println!("{variant}");
            }
        }

        Commands::Acronyms { filter } => {
            let needle = filter.as_deref().map(str::trim);
            let mut shown = 0usize;
            for (abbr, expansion) in acronyms.iter() {
                if let Some(n) = needle {
                    if !contains_folded(abbr, n) && !contains_folded(expansion, n) {
                        continue;
                    }
                }
                println!("{abbr:<10} {expansion}");
                shown += 1;
            }
            if shown == 0 {
                println!("No acronyms found.");
            }
        }

        Commands::Code { code } => {
            let catalog = load_catalog(args.input.as_deref())?;
            match catalog.find_by_code(&code) {
                Some(r) => {
                    println!("Code: {}", r.code());
                    println!("Description: {}", r.description());
                }
                None => eprintln!("No entry found for code: {}", code.trim()),
            }
        }

        Commands::Stats => {
            let catalog = load_catalog(args.input.as_deref())?;
            let stats = catalog.stats();
            println!("Reference table statistics:");
            if let Some(source) = &stats.source {
                println!("  Source: {}", source.display());
            }
            println!("  Codes: {}", stats.rows);
            println!("  Skipped rows: {}", stats.skipped_rows);
            println!("  Acronyms: {}", acronyms.len());
        }
    }

    Ok(())
}

/// Logs go to stderr so that stdout stays clean for results and `--json`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_acronyms(path: Option<&std::path::Path>) -> anyhow::Result<AcronymTable> {
    let builtin = AcronymTable::builtin();
    match path {
        Some(path) => Ok(builtin.merged(&read_acronyms(path)?)),
        None => Ok(builtin.clone()),
    }
}

#[cfg(feature = "json")]
fn read_acronyms(path: &std::path::Path) -> anyhow::Result<AcronymTable> {
    AcronymTable::load_json(path)
        .with_context(|| format!("reading acronym dictionary {}", path.display()))
}

#[cfg(not(feature = "json"))]
fn read_acronyms(path: &std::path::Path) -> anyhow::Result<AcronymTable> {
    anyhow::bail!("--acronyms {} requires the `json` feature", path.display())
}

fn load_catalog(input: Option<&std::path::Path>) -> anyhow::Result<Catalog> {
    match input {
        Some(path) => Catalog::load_from_path(path)
            .with_context(|| format!("loading reference table {}", path.display())),
        None => Catalog::load()
            .context("no reference table available; pass --input or set UNSPSC_DATA"),
    }
}

fn print_outcome(outcome: &SearchOutcome, config: &SearchConfig, page: usize, scores: bool) {
    if outcome.is_empty() {
        println!("No matches found. Try a different search term.");
    } else {
        println!("Found {} matches", outcome.len());
        for m in &outcome.matches {
            if scores {
                println!("{}  {:.3}  {}", m.code, m.score, m.description);
            } else {
                println!("{}  {}", m.code, m.description);
            }
        }
        if outcome.len() == config.max_results {
            println!(
                "(showing up to {}; use --page {} for {} more)",
                config.max_results,
                page.max(1) + 1,
                PAGE_SIZE
            );
        }
    }
    if outcome.timed_out {
        println!("Search stopped after {:?}; results may be incomplete.", config.timeout);
    }
}
