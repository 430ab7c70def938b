pub mod parser;

use std::io;

use anyhow::{bail, Context};
use async_trait::async_trait;

use crate::config::Config;
use crate::db::Database;

use self::parser::RecordError;

/// Records accumulated per storage write.
pub const BATCH_SIZE: usize = 500;

/// Storage side of one dataset's load: the row count drives the
/// idempotency check, and each `insert_batch` call is atomic.
#[async_trait]
pub trait BatchSink<R: Send + Sync> {
    async fn count(&self) -> anyhow::Result<i64>;

    async fn insert_batch(&self, records: &[R]) -> anyhow::Result<()>;
}

#[derive(Debug, Default, PartialEq)]
pub struct LoadOutcome {
    pub loaded: usize,
    pub skipped: usize,
}

/// Loads one delimited dataset into its sink.
///
/// A non-empty target table makes the whole load a no-op. The first row
/// is a column header and is always discarded; a source without one is
/// reported as a failure before anything reaches storage. Malformed rows
/// are logged and skipped, stream or storage errors abort the rest of
/// this dataset.
pub async fn load<R, S, T>(
    label: &str,
    sink: &S,
    source: T,
    parse: fn(&csv::StringRecord) -> Result<R, RecordError>,
) -> anyhow::Result<LoadOutcome>
where
    R: Send + Sync,
    S: BatchSink<R> + Sync,
    T: io::Read,
{
    let existing = sink
        .count()
        .await
        .with_context(|| format!("error counting existing {label} rows"))?;

    if existing > 0 {
        log::info!("{label} data already loaded ({existing} rows), skipping");
        return Ok(LoadOutcome::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut records = reader.records();

    match records.next() {
        None => bail!("{label} source is empty"),
        // Header content is discarded either way; only stream errors
        // matter here.
        Some(Err(e)) if !matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
            return Err(e).with_context(|| format!("error reading {label} header"));
        }
        Some(_) => {}
    }

    let mut outcome = LoadOutcome::default();
    let mut batch: Vec<R> = Vec::with_capacity(BATCH_SIZE);

    for record in records {
        let record = match record {
            Ok(record) => record,
            // A row that fails to decode is one bad record, not a broken
            // stream.
            Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                log::warn!("skipping undecodable {label} record: {e}");
                outcome.skipped += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("error reading {label} records"));
            }
        };

        match parse(&record) {
            Ok(parsed) => batch.push(parsed),
            Err(e) => {
                log::warn!("skipping bad {label} record ({}): {e}", raw_row(&record));
                outcome.skipped += 1;
                continue;
            }
        }

        if batch.len() >= BATCH_SIZE {
            sink.insert_batch(&batch)
                .await
                .with_context(|| format!("error persisting {label} batch"))?;
            outcome.loaded += batch.len();
            batch.clear();
        }
    }

    if !batch.is_empty() {
        sink.insert_batch(&batch)
            .await
            .with_context(|| format!("error persisting {label} batch"))?;
        outcome.loaded += batch.len();
    }

    log::info!(
        "{label} data loaded: {} records, {} skipped",
        outcome.loaded,
        outcome.skipped
    );

    Ok(outcome)
}

/// Runs both dataset loads, zones first, before the service starts taking
/// traffic. A failed dataset is logged and does not stop the other one or
/// the process.
pub async fn load_on_startup(db: &Database, config: &Config) {
    log::info!("Data loading started");

    load_file("zone", db, &config.zones_csv, parser::parse_zone).await;
    load_file("trip", db, &config.trips_csv, parser::parse_trip).await;
}

async fn load_file<R>(
    label: &str,
    db: &Database,
    path: &str,
    parse: fn(&csv::StringRecord) -> Result<R, RecordError>,
) where
    R: Send + Sync,
    Database: BatchSink<R>,
{
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::error!("cannot open {label} dataset {path}: {e}");
            return;
        }
    };

    if let Err(e) = load(label, db, file, parse).await {
        log::error!("loading {label} dataset {path} failed: {e:#}");
    }
}

fn raw_row(record: &csv::StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
