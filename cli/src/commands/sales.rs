use std::path::PathBuf;

use bookinn_analysis::report::SALES_RESULTS;
use bookinn_analysis::sales::{self, PairResult};
use bookinn_common::config::Config;

use crate::commands::finish_report;
use crate::terminal::{print, progress};

pub fn sales(files: &[PathBuf], cfg: &Config) -> anyhow::Result<()> {
    let Some(pairs) = sales::pair_up(files) else {
        print::usage("bookinn sales <PRICE_CATALOGUE> <SALES_RECORD> [<PRICE_CATALOGUE> <SALES_RECORD>...]");
        return Ok(());
    };

    let progress = progress::start(pairs.len(), cfg);
    let results: Vec<PairResult> = sales::process_pairs(&pairs, |path| progress.tick(path));
    drop(progress);

    if results.is_empty() {
        print::no_results("sales totals");
    }

    finish_report(cfg, SALES_RESULTS, &sales::results_text(&results), &sales::table(&results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unpaired_files_do_no_work() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            output_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        sales(&[], &cfg).unwrap();
        sales(&[PathBuf::from("priceCatalogue.json")], &cfg).unwrap();

        assert!(!dir.path().join(SALES_RESULTS).exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
