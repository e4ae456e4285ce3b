// crates/unspsc-core/src/loader/common_io.rs
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Open `path` buffered, decoding gzip when the file name ends in `.gz`.
///
/// Returns a generic reader so the parser does not care about compression.
pub(super) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(crate::error::UnspscError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
