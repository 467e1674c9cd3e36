use chrono::NaiveDate;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

use crate::dates::parse_date;
use crate::error::FeeError;

pub const DUE_DATE_FORMAT: &str = "%m/%d/%Y";

/// One row of the book-returns ledger. Any extra columns are ignored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ReturnRecord {
    pub patron_id: String,
    #[serde(deserialize_with = "parse_mdy")]
    pub date_due: NaiveDate,
    #[serde(deserialize_with = "parse_mdy")]
    pub date_returned: NaiveDate,
}

impl ReturnRecord {
    /// Whole days between the due date and the return date; negative when the
    /// book came back early.
    pub fn elapsed_days(&self) -> i64 {
        (self.date_returned - self.date_due).num_days()
    }
}

pub fn read_returns_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ReturnRecord>, FeeError> {
    let file = File::open(path)?;
    read_returns(file)
}

pub fn read_returns<R: Read>(reader: R) -> Result<Vec<ReturnRecord>, FeeError> {
    // csv::Reader buffers internally
    let mut rdr = csv::Reader::from_reader(reader);

    let records = rdr
        .deserialize::<ReturnRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed {} return records", records.len());

    Ok(records)
}

fn parse_mdy<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    parse_date(&s, DUE_DATE_FORMAT).map_err(serde::de::Error::custom)
}
