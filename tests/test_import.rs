//! TSV import pipeline: read a file, replace-load it, query it back.

mod common;

use std::io::Write;

use common::{day, sorted};
use stock_price_stats::{ingest, PricePoint, StockPriceError};
use tempfile::NamedTempFile;

fn write_tsv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn tsv_file_loads_into_store() {
    let file = write_tsv(
        "7203\t2025/2/1\t2800\n\
         7203\t2025/2/2\t2850\n\
         \n\
         6758\t2025/02/01\t13000.5\n",
    );
    let (db, _tmp) = common::setup_store();

    let records = ingest::read_tsv(file.path()).unwrap();
    assert_eq!(db.prices().initialize_table(&records).unwrap(), 3);

    let all = db.prices().fetch_all().unwrap();
    assert_eq!(
        sorted(all),
        sorted(vec![
            PricePoint::new("7203", day(2025, 2, 1), 2800.0),
            PricePoint::new("7203", day(2025, 2, 2), 2850.0),
            PricePoint::new("6758", day(2025, 2, 1), 13000.5),
        ])
    );
}

#[test]
fn malformed_file_leaves_store_untouched() {
    let file = write_tsv("7203\t2025/2/1\t2800\n7203\t2025/2/x\t2850\n");
    let (db, _tmp) = common::setup_sample_store();

    let err = ingest::read_tsv(file.path()).unwrap_err();
    assert!(matches!(err, StockPriceError::InvalidDate { line_no: 2, .. }));

    assert_eq!(db.prices().count().unwrap(), common::sample_prices().len());
}

#[test]
fn missing_file_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = ingest::read_tsv(&tmp.path().join("missing.tsv")).unwrap_err();
    assert!(matches!(err, StockPriceError::Io(_)));
}
