use std::path::PathBuf;

use bookinn_analysis::report::WORD_COUNT_RESULTS;
use bookinn_analysis::word_count::{self, FileWordCount};
use bookinn_common::config::Config;

use crate::commands::finish_report;
use crate::terminal::{print, progress};

pub fn words(files: &[PathBuf], cfg: &Config) -> anyhow::Result<()> {
    if files.is_empty() {
        print::usage("bookinn words <FILE>...");
        return Ok(());
    }

    let progress = progress::start(files.len(), cfg);
    let results: Vec<FileWordCount> = word_count::process_files(files, |path| progress.tick(path));
    drop(progress);

    let table = word_count::table(&results);
    finish_report(cfg, WORD_COUNT_RESULTS, &table.to_string(), &table)
}
