pub mod convert;
pub mod customer;
pub mod hotel;
pub mod sales;
pub mod statistics;
pub mod words;

use std::path::PathBuf;

use bookinn_analysis::report;
use bookinn_analysis::table::Table;
use bookinn_common::config::Config;
use bookinn_common::{success, warn};
use bookinn_core::ModelError;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};

use crate::terminal::print;

#[derive(Parser)]
#[command(name = "bookinn")]
#[command(about = "File statistics and a toy hotel reservation model.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the customer, hotel and reservation records
    #[arg(long, global = true, env = "BOOKINN_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory the results files are written into
    #[arg(long, global = true, default_value = ".")]
    pub output_dir: PathBuf,

    /// Less output (-q hides headers, -qq also the progress bar)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Descriptive statistics of files holding one number per line
    #[command(alias = "st")]
    Stats { files: Vec<PathBuf> },
    /// Sales totals from price catalogue / sales record pairs
    #[command(alias = "sa")]
    Sales { files: Vec<PathBuf> },
    /// Binary and hexadecimal forms of files holding one integer per line
    #[command(alias = "c")]
    Convert { files: Vec<PathBuf> },
    /// Word frequencies compared across text files
    #[command(alias = "w")]
    Words { files: Vec<PathBuf> },
    /// Create, show, update or delete customer records
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Manage hotels, their rooms and reservations
    Hotel {
        #[command(subcommand)]
        action: HotelAction,
    },
}

#[derive(Subcommand)]
pub enum CustomerAction {
    Create { id: String, name: String, email: String },
    Show { id: String },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum HotelAction {
    Create { name: String, location: String },
    Show { hotel: String },
    Modify {
        hotel: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    Delete { hotel: String },
    AddRoom {
        hotel: String,
        number: u32,
        room_type: String,
        price: f64,
    },
    Reserve {
        hotel: String,
        reservation_id: String,
        customer_id: String,
        room: u32,
        start: NaiveDate,
        end: NaiveDate,
    },
    Cancel { hotel: String, reservation_id: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Splits model outcomes into "report and carry on" and "give up".
pub fn recover<T>(result: Result<T, ModelError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            warn!("{e}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Writes the results file and shows the table.
pub fn finish_report(cfg: &Config, file_name: &str, contents: &str, table: &Table) -> anyhow::Result<()> {
    let path: PathBuf = report::write_results(&cfg.output_dir, file_name, contents)?;
    print::table(table);
    success!("Results written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn analysis_commands_accept_no_files() {
        let cli = CommandLine::try_parse_from(["bookinn", "stats"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats { files } if files.is_empty()));
    }

    #[test]
    fn reserve_parses_dates() {
        let cli = CommandLine::try_parse_from([
            "bookinn", "-q", "hotel", "reserve", "Test Hotel", "r1", "c1", "101", "2023-01-01", "2023-01-05",
        ])
        .unwrap();
        assert_eq!(cli.quiet, 1);
        let Commands::Hotel { action: HotelAction::Reserve { room, start, .. } } = cli.command else {
            panic!("expected hotel reserve");
        };
        assert_eq!(room, 101);
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn bad_dates_are_rejected() {
        let parsed = CommandLine::try_parse_from([
            "bookinn", "hotel", "reserve", "Inn", "r1", "c1", "1", "yesterday", "2023-01-05",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn model_misses_are_recovered_store_failures_are_not() {
        assert!(matches!(recover::<()>(Err(ModelError::RoomUnavailable(1))), Ok(None)));
        let store_failure = ModelError::Store(bookinn_core::StoreError::InvalidKey {
            kind: bookinn_core::RecordKind::Hotel,
            id: String::new(),
        });
        assert!(recover::<()>(Err(store_failure)).is_err());
    }
}
