pub mod dates;
pub mod error;
pub mod fees;
pub mod paths;
pub mod records;

pub use dates::{add_date_range, date_range, reformat_dates};
pub use error::FeeError;
pub use fees::{fees_report, fees_report_file, Cents, PatronFee, LATE_FEE_PER_DAY};
pub use paths::data_file_path;
pub use records::{read_returns, read_returns_csv, ReturnRecord};
