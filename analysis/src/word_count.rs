//! Word frequencies, compared across files.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bookinn_common::{info, warn};

use crate::input;
use crate::table::Table;

/// Stripped from both ends of every token.
const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}'];

pub type WordCounts = BTreeMap<String, usize>;

#[derive(Debug, Clone)]
pub struct FileWordCount {
    pub path: PathBuf,
    pub counts: WordCounts,
    pub elapsed: Duration,
}

/// Lower-cased, whitespace-separated tokens with surrounding punctuation
/// removed. Tokens that are nothing but punctuation are dropped.
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|token| token.trim_matches(PUNCTUATION))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn count_words(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for word in words(text) {
        *counts.entry(word).or_default() += 1;
    }
    counts
}

/// Counts every file. An unreadable file is reported and still gets an
/// (empty) entry, so it keeps its column in the table.
pub fn process_files(paths: &[PathBuf], mut on_file: impl FnMut(&Path)) -> Vec<FileWordCount> {
    paths
        .iter()
        .map(|path| {
            let start: Instant = Instant::now();
            let counts: WordCounts = match input::read_to_string(path) {
                Ok(text) => count_words(&text),
                Err(e) => {
                    warn!("{e}");
                    WordCounts::new()
                }
            };
            let elapsed: Duration = start.elapsed();
            info!("{}: {} distinct words in {:.4} seconds", path.display(), counts.len(), elapsed.as_secs_f64());
            on_file(path);
            FileWordCount {
                path: path.clone(),
                counts,
                elapsed,
            }
        })
        .collect()
}

/// One row per word (sorted), one column per file.
pub fn table(results: &[FileWordCount]) -> Table {
    let headers = std::iter::once("Word".to_string())
        .chain(results.iter().map(|r| r.path.display().to_string()));
    let mut table = Table::new(headers);

    let all_words: BTreeSet<&str> = results
        .iter()
        .flat_map(|r| r.counts.keys().map(String::as_str))
        .collect();

    for word in all_words {
        let counts = results
            .iter()
            .map(|r| r.counts.get(word).copied().unwrap_or(0).to_string());
        table.push_row(std::iter::once(word.to_string()).chain(counts));
    }
    table
}
