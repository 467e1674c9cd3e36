use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";

/// Resolves a logical data-file name (e.g. `book_returns.csv`) to its location
/// under the crate's `data/` directory.
pub fn data_file_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR).join(name)
}
