use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeeError {
    #[error("invalid date '{value}', expected format {pattern}")]
    Date {
        value: String,
        pattern: &'static str,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("{count} days starting at {start} run past the last supported date")]
    DateOverflow { start: NaiveDate, count: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
