use std::error::Error;
use std::fs::{self, File};
use std::io::Read;
use std::path::PathBuf;

use csv::ReaderBuilder;
use log::debug;

use crate::transactions::TransactionRecord;

pub struct Loader {
    directory: PathBuf,
    threshold: i64,
}

#[derive(Debug)]
pub struct PartitionedRecords {
    /// Records whose truncated amount is at or below the threshold.
    pub below: Vec<TransactionRecord>,
    /// Records whose truncated amount is above the threshold.
    pub above: Vec<TransactionRecord>,
}

impl PartitionedRecords {
    pub fn total(&self) -> usize {
        self.below.len() + self.above.len()
    }
}

impl Loader {
    pub fn new(directory: impl Into<PathBuf>, threshold: i64) -> Self {
        Self {
            directory: directory.into(),
            threshold,
        }
    }

    /// Parse every file in the directory and split the records by the
    /// amount threshold. Any unreadable file or malformed row fails the
    /// whole load.
    pub fn load(&self) -> Result<PartitionedRecords, Box<dyn Error>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            debug!("reading transactions from {}", path.display());
            let file = File::open(&path)?;
            records.extend(read_records(file)?);
        }
        Ok(self.partition(records))
    }

    fn partition(&self, records: Vec<TransactionRecord>) -> PartitionedRecords {
        let mut below = Vec::new();
        let mut above = Vec::new();
        for record in records {
            if record.amount_at_most(self.threshold) {
                below.push(record);
            } else {
                above.push(record);
            }
        }
        PartitionedRecords { below, above }
    }
}

/// The input files carry no header row; every line is one transaction.
fn read_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: TransactionRecord = result?;
        records.push(record);
    }
    Ok(records)
}
