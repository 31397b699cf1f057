use crate::models::City;
use crate::models::city::parse_city_arg;
use crate::models::filters::{DaySelection, MonthSelection, parse_day_arg, parse_month_arg};
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for bikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: filter trips by month and day and print travel statistics",
    long_about = None
)]
pub struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Explore {
        /// Skip the city question on the first round
        #[arg(long, value_parser = parse_city_arg, help = "City: chicago, \"new york city\" or washington")]
        city: Option<City>,

        /// Skip the month question on the first round
        #[arg(long, value_parser = parse_month_arg, help = "Month from january to june, or all")]
        month: Option<MonthSelection>,

        /// Skip the day question on the first round
        #[arg(long, value_parser = parse_day_arg, help = "Week day (full word), or all")]
        day: Option<DaySelection>,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file if none exists")]
        init: bool,
    },
}
