//! Descriptive statistics over one number per line.

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bookinn_common::warn;

use crate::input;
use crate::table::Table;

/// Population statistics of a non-empty sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; the smallest one wins a tie.
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone)]
pub struct FileStatistics {
    pub path: PathBuf,
    pub stats: Statistics,
    pub elapsed: Duration,
}

/// Returns `None` for an empty sample.
pub fn calculate(data: &[f64]) -> Option<Statistics> {
    if data.is_empty() {
        return None;
    }

    let mut sorted: Vec<f64> = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count: usize = sorted.len();
    let n: f64 = count as f64;
    let mean: f64 = sorted.iter().sum::<f64>() / n;

    let mid: usize = count / 2;
    let median: f64 = if count % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    };

    let variance: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    Some(Statistics {
        count,
        mean,
        median,
        mode: mode_of_sorted(&sorted),
        variance,
        std_dev: variance.sqrt(),
    })
}

// Runs of equal values are adjacent once sorted; only a strictly longer run
// replaces the current best, so ties keep the smaller value.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best: (f64, usize) = (sorted[0], 0);
    let mut run: (f64, usize) = (sorted[0], 0);

    for &value in sorted {
        if value == run.0 {
            run.1 += 1;
        } else {
            run = (value, 1);
        }
        if run.1 > best.1 {
            best = run;
        }
    }
    best.0
}

/// Reads finite numbers from `path`, one per line.
pub fn read_data(path: &Path) -> Result<Vec<f64>, crate::AnalysisError> {
    let values: Vec<f64> = input::read_values(path)?;
    let total: usize = values.len();
    let finite: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    if finite.len() != total {
        warn!("{}: skipped {} non-finite values", path.display(), total - finite.len());
    }
    Ok(finite)
}

/// Computes statistics for every readable, non-empty file.
///
/// Unreadable and empty files are reported and left out. `on_file` runs
/// once per input, whatever its outcome.
pub fn process_files(paths: &[PathBuf], mut on_file: impl FnMut(&Path)) -> Vec<FileStatistics> {
    let mut results: Vec<FileStatistics> = Vec::new();

    for path in paths {
        let start: Instant = Instant::now();
        match read_data(path) {
            Ok(data) => match calculate(&data) {
                Some(stats) => results.push(FileStatistics {
                    path: path.clone(),
                    stats,
                    elapsed: start.elapsed(),
                }),
                None => warn!("No data could be read from {}, moving on", path.display()),
            },
            Err(e) => warn!("{e}"),
        }
        on_file(path);
    }

    results
}

pub fn results_block(stats: &Statistics, elapsed: Duration) -> String {
    format!(
        "Descriptive Statistics:\n\
         Count: {}\n\
         Mean: {}\n\
         Median: {}\n\
         Mode: {}\n\
         Standard Deviation: {}\n\
         Variance: {}\n\
         Elapsed: {:.4} seconds\n",
        stats.count,
        stats.mean,
        stats.median,
        stats.mode,
        stats.std_dev,
        stats.variance,
        elapsed.as_secs_f64()
    )
}

/// Contents of the results file: one labelled block per file.
pub fn results_text(results: &[FileStatistics]) -> String {
    let mut text = String::new();
    for result in results {
        let _ = writeln!(
            text,
            "File: {}\n{}",
            result.path.display(),
            results_block(&result.stats, result.elapsed)
        );
    }
    text
}

pub fn table(results: &[FileStatistics]) -> Table {
    let mut table = Table::new([
        "File", "Count", "Mean", "Median", "Mode", "Std Dev", "Variance", "Elapsed",
    ]);
    for result in results {
        let stats: &Statistics = &result.stats;
        table.push_row([
            result.path.display().to_string(),
            stats.count.to_string(),
            format!("{:.2}", stats.mean),
            format!("{:.2}", stats.median),
            format!("{:.2}", stats.mode),
            format!("{:.2}", stats.std_dev),
            format!("{:.2}", stats.variance),
            format!("{:.4} s", result.elapsed.as_secs_f64()),
        ]);
    }
    table
}
