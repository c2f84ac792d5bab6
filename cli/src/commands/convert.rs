use std::path::PathBuf;

use bookinn_analysis::conversion::{self, FileConversions};
use bookinn_analysis::report::CONVERSION_RESULTS;
use bookinn_common::config::Config;

use crate::commands::finish_report;
use crate::terminal::{print, progress};

pub fn convert(files: &[PathBuf], cfg: &Config) -> anyhow::Result<()> {
    if files.is_empty() {
        print::usage("bookinn convert <FILE>...");
        return Ok(());
    }

    let progress = progress::start(files.len(), cfg);
    let results: Vec<FileConversions> = conversion::process_files(files, |path| progress.tick(path));
    drop(progress);

    let table = conversion::table(&results);
    if table.is_empty() {
        print::no_results("numbers");
    }

    finish_report(cfg, CONVERSION_RESULTS, &table.to_string(), &table)
}
