use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use unspsc_core::{AcronymTable, Catalog, CodeSearch, SearchConfig, UnspscError};

const SAMPLE: &str = "Code,Description\n\
                      41111720,Scanning electron microscopes\n\
                      43211507,Laptop computers\n\
                      ,Row without a code\n";

fn write_sample(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn load_from_path_counts_rows_and_skips() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "unspsc_codes.csv");

    let catalog = Catalog::load_from_path(&path).unwrap();
    let stats = catalog.stats();
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.skipped_rows, 1);
    assert_eq!(stats.source.as_deref(), Some(path.as_path()));
}

#[test]
fn first_existing_candidate_wins() {
    let dir = TempDir::new().unwrap();
    let present = write_sample(&dir, "second.csv");
    fs::write(dir.path().join("third.csv"), "Code,Description\n1,Other\n").unwrap();

    let candidates = vec![
        dir.path().join("first.csv"),
        present.clone(),
        dir.path().join("third.csv"),
    ];
    let catalog = Catalog::load_from_candidates(&candidates).unwrap();
    assert_eq!(catalog.source(), Some(present.as_path()));
    assert!(catalog.find_by_code("41111720").is_some());
}

#[test]
fn directories_are_not_candidates() {
    let dir = TempDir::new().unwrap();
    let candidates = vec![dir.path().to_path_buf()];
    assert!(matches!(
        Catalog::load_from_candidates(&candidates),
        Err(UnspscError::NotFound { .. })
    ));
}

#[test]
fn broken_table_surfaces_invalid_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unspsc_codes.csv");
    fs::write(&path, "Id,Name\n1,Foo\n").unwrap();

    assert!(matches!(
        Catalog::load_from_candidates(&[path]),
        Err(UnspscError::InvalidData(_))
    ));
}

#[test]
fn loaded_table_is_searchable() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load_from_path(write_sample(&dir, "codes.csv")).unwrap();
    let hits = catalog.find_codes("sem", AcronymTable::builtin(), &SearchConfig::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "41111720");
}

#[test]
fn shared_catalog_is_loaded_once() {
    let first = Catalog::shared().unwrap();
    let second = Catalog::shared().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(!first.is_empty());
}

#[cfg(feature = "compact")]
#[test]
fn gzip_tables_are_decoded() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unspsc_codes.csv.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let catalog = Catalog::load_from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[cfg(feature = "compact")]
#[test]
fn compressed_candidates_are_probed() {
    assert!(Catalog::candidate_paths()
        .iter()
        .any(|p| p.to_string_lossy().ends_with("unspsc_codes.csv.gz")));
}
