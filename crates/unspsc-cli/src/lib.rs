//! unspsc-cli
//! ==========
//!
//! Command-line interface for the `unspsc-core` code search.
//!
//! This crate primarily provides a binary (`unspsc-cli`). The library target
//! only carries this overview so that docs.rs renders a page for it.
//!
//! Basic usage:
//!
//! ```text
//! unspsc-cli search SEM
//! unspsc-cli search gas chromatograph --page 2
//! unspsc-cli --input data/unspsc_codes.csv search "ph meter" --scores
//! unspsc-cli expand uv-vis
//! unspsc-cli acronyms --filter spectrometer
//! unspsc-cli code 41111720
//! unspsc-cli stats
//! ```
//!
//! For programmatic access use the [`unspsc-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// The binary is the deliverable; this target intentionally exposes no API.
