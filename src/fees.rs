use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use crate::error::FeeError;
use crate::records::{read_returns, read_returns_csv, ReturnRecord};

pub type PatronId = String;
pub type Cents = i64;

/// Charged for every day a book is returned after its due date.
pub const LATE_FEE_PER_DAY: Cents = 25;

pub const REPORT_HEADER: [&str; 2] = ["patron_id", "late_fees"];

#[derive(Debug, Serialize, PartialEq, Default)]
pub struct PatronFee {
    pub patron_id: PatronId,
    #[serde(serialize_with = "serialize_cents_2dp")]
    pub late_fees: Cents,
}

pub fn late_fee(record: &ReturnRecord) -> Cents {
    let elapsed_days = record.elapsed_days();
    if elapsed_days > 0 {
        elapsed_days * LATE_FEE_PER_DAY
    } else {
        0
    }
}

/// Sums the late fees of every record per patron. Patrons keep the order in
/// which they first appear in `records`.
pub fn aggregate_fees(records: Vec<ReturnRecord>) -> IndexMap<PatronId, PatronFee> {
    let mut result: IndexMap<PatronId, PatronFee> = IndexMap::new();

    for record in records {
        let fee = late_fee(&record);

        result
            .entry(record.patron_id)
            .and_modify(|r| r.late_fees += fee)
            .or_insert_with_key(|patron_id| PatronFee {
                patron_id: patron_id.clone(),
                late_fees: fee,
            });
    }

    for patron_fee in result.values_mut() {
        patron_fee.late_fees = patron_fee.late_fees.max(0);
    }
    log::debug!("aggregated late fees for {} patrons", result.len());

    result
}

/// Writes the `patron_id,late_fees` header followed by one row per patron.
/// The header is written even when there are no patrons.
pub fn write_report<W, I>(fees: I, writer: W) -> Result<(), FeeError>
where
    W: Write,
    I: IntoIterator<Item = PatronFee>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(REPORT_HEADER)?;
    for fee in fees {
        wtr.serialize(fee)?;
    }

    wtr.flush()?;

    Ok(())
}

/// Reads a book-returns ledger from `input` and writes the per-patron late fee
/// summary to `output`. The first malformed row aborts the report before
/// anything is written.
pub fn fees_report<R: Read, W: Write>(input: R, output: W) -> Result<(), FeeError> {
    let records = read_returns(input)?;
    let fees = aggregate_fees(records);

    write_report(fees.into_values(), output)
}

/// File-based [`fees_report`]. The output file is only created once the input
/// has been fully parsed. Returns the number of patrons written.
pub fn fees_report_file<P, Q>(infile: P, outfile: Q) -> Result<usize, FeeError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let records = read_returns_csv(&infile)?;
    let fees = aggregate_fees(records);
    let patrons = fees.len();

    let file = File::create(&outfile)?;
    write_report(fees.into_values(), file)?;
    log::info!(
        "wrote late fees for {} patrons to {:?}",
        patrons,
        outfile.as_ref()
    );

    Ok(patrons)
}

fn serialize_cents_2dp<S>(value: &Cents, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}.{:02}", value / 100, value % 100))
}
