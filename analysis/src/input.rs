//! Line-oriented input shared by the numeric commands.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use bookinn_common::warn;

use crate::error::AnalysisError;

pub fn read_to_string(path: &Path) -> Result<String, AnalysisError> {
    fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses every non-blank line of `contents` as a `T`.
///
/// Lines that do not parse are skipped with a warning naming the file, the
/// line number and the offending text.
pub fn parse_lines<T>(path: &Path, contents: &str) -> Vec<T>
where
    T: FromStr,
    T::Err: Display,
{
    contents
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line: &str = line.trim();
            if line.is_empty() {
                return None;
            }
            match line.parse::<T>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("{}:{}: skipping '{}' ({e})", path.display(), idx + 1, line);
                    None
                }
            }
        })
        .collect()
}

/// Reads `path` and parses it line by line, see [`parse_lines`].
pub fn read_values<T>(path: &Path) -> Result<Vec<T>, AnalysisError>
where
    T: FromStr,
    T::Err: Display,
{
    let contents: String = read_to_string(path)?;
    Ok(parse_lines(path, &contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn bad_and_blank_lines_are_skipped() {
        let path = PathBuf::from("data.txt");
        let values: Vec<f64> = parse_lines(&path, "1.5\n  2 \nabc\n\n-3e2\n");
        assert_eq!(values, vec![1.5, 2.0, -300.0]);
    }

    #[test]
    fn integers_reject_fractions() {
        let path = PathBuf::from("numbers.txt");
        let values: Vec<i64> = parse_lines(&path, "10\n2.5\n+7\n-1\n");
        assert_eq!(values, vec![10, 7, -1]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result: Result<Vec<i64>, _> = read_values(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(AnalysisError::Read { .. })));
    }
}
