use std::path::PathBuf;

use bookinn_analysis::report::STATISTICS_RESULTS;
use bookinn_analysis::statistics::{self, FileStatistics};
use bookinn_common::config::Config;

use crate::commands::finish_report;
use crate::terminal::{print, progress};

pub fn stats(files: &[PathBuf], cfg: &Config) -> anyhow::Result<()> {
    if files.is_empty() {
        print::usage("bookinn stats <FILE>...");
        return Ok(());
    }

    let progress = progress::start(files.len(), cfg);
    let results: Vec<FileStatistics> = statistics::process_files(files, |path| progress.tick(path));
    drop(progress);

    if results.is_empty() {
        print::no_results("statistics");
    }

    finish_report(
        cfg,
        STATISTICS_RESULTS,
        &statistics::results_text(&results),
        &statistics::table(&results),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_files_does_no_work() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            output_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        stats(&[], &cfg).unwrap();

        assert!(!dir.path().join(STATISTICS_RESULTS).exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
