mod commands;
mod terminal;

use bookinn_common::config::Config;
use commands::{CommandLine, Commands, convert, customer, hotel, sales, statistics, words};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let CommandLine {
        command,
        data_dir,
        output_dir,
        quiet,
        no_banner,
    } = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        data_dir,
        output_dir,
        quiet,
        no_banner,
    };

    print::banner(&cfg);

    match command {
        Commands::Stats { files } => {
            print::header("descriptive statistics", cfg.quiet);
            statistics::stats(&files, &cfg)
        }
        Commands::Sales { files } => {
            print::header("computing sales", cfg.quiet);
            sales::sales(&files, &cfg)
        }
        Commands::Convert { files } => {
            print::header("converting numbers", cfg.quiet);
            convert::convert(&files, &cfg)
        }
        Commands::Words { files } => {
            print::header("counting words", cfg.quiet);
            words::words(&files, &cfg)
        }
        Commands::Customer { action } => customer::customer(action, &cfg),
        Commands::Hotel { action } => hotel::hotel(action, &cfg),
    }
}
