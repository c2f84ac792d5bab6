//! Binary and hexadecimal forms of integers, one per line.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bookinn_common::warn;

use crate::input;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub decimal: i64,
    pub binary: String,
    pub hexadecimal: String,
}

#[derive(Debug, Clone)]
pub struct FileConversions {
    pub path: PathBuf,
    pub conversions: Vec<Conversion>,
    pub elapsed: Duration,
}

fn sign(n: i64) -> &'static str {
    if n < 0 { "-" } else { "" }
}

/// `0b`-prefixed binary, sign in front: `-0b101`.
pub fn to_binary(n: i64) -> String {
    format!("{}0b{:b}", sign(n), n.unsigned_abs())
}

/// `0x`-prefixed lower-case hexadecimal, sign in front: `-0xff`.
pub fn to_hexadecimal(n: i64) -> String {
    format!("{}0x{:x}", sign(n), n.unsigned_abs())
}

pub fn convert(n: i64) -> Conversion {
    Conversion {
        decimal: n,
        binary: to_binary(n),
        hexadecimal: to_hexadecimal(n),
    }
}

/// Converts every file. An unreadable file is reported and contributes no
/// conversions.
pub fn process_files(paths: &[PathBuf], mut on_file: impl FnMut(&Path)) -> Vec<FileConversions> {
    paths
        .iter()
        .map(|path| {
            let start: Instant = Instant::now();
            let numbers: Vec<i64> = input::read_values(path).unwrap_or_else(|e| {
                warn!("{e}");
                Vec::new()
            });
            let conversions: Vec<Conversion> = numbers.into_iter().map(convert).collect();
            on_file(path);
            FileConversions {
                path: path.clone(),
                conversions,
                elapsed: start.elapsed(),
            }
        })
        .collect()
}

pub fn table(results: &[FileConversions]) -> Table {
    let mut table = Table::new(["File", "Decimal", "Binary", "Hexadecimal", "Elapsed"]);
    for result in results {
        let file: String = result.path.display().to_string();
        let elapsed: String = format!("{:.4} s", result.elapsed.as_secs_f64());
        for conversion in &result.conversions {
            table.push_row([
                file.clone(),
                conversion.decimal.to_string(),
                conversion.binary.clone(),
                conversion.hexadecimal.clone(),
                elapsed.clone(),
            ]);
        }
    }
    table
}
