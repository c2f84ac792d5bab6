//! # BookInn Analysis
//!
//! The four file-crunching commands of `bookinn`, minus the terminal:
//!
//! * [`statistics`]: descriptive statistics of one number per line.
//! * [`sales`]: sales totals from a price catalogue and a sales record (JSON).
//! * [`conversion`]: binary and hexadecimal forms of one integer per line.
//! * [`word_count`]: word frequencies across text files.
//!
//! Each module reads its inputs, skips what it cannot use with a `warn!`, and
//! returns plain results. [`table::Table`] renders them and [`report`] writes
//! the fixed-name results files.

pub mod conversion;
pub mod error;
pub mod input;
pub mod report;
pub mod sales;
pub mod statistics;
pub mod table;
pub mod word_count;

pub use error::AnalysisError;
