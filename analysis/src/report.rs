use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;

pub const STATISTICS_RESULTS: &str = "StatisticsResults.txt";
pub const SALES_RESULTS: &str = "SalesResults.txt";
pub const CONVERSION_RESULTS: &str = "ConversionResults.txt";
pub const WORD_COUNT_RESULTS: &str = "WordCountResults.txt";

/// Writes `contents` to `dir/file_name`, replacing whatever was there.
pub fn write_results(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, AnalysisError> {
    let path: PathBuf = dir.join(file_name);
    fs::write(&path, contents).map_err(|source| AnalysisError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
