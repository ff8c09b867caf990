use chrono::NaiveDate;
use clap::Parser;

use crate::error::ContactsResult;
use crate::queries::birthday_queries::DEFAULT_WINDOW_DAYS;
use crate::validation;

/// Command-line flags of the `contacts` binary.
#[derive(Debug, Parser)]
#[command(name = "contacts", version, about = "Assistant bot for names, phones and birthdays")]
pub struct Args {
    /// How many days ahead `birthdays` looks
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,

    /// Pin the current date (DD.MM.YYYY) instead of using the local clock
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub today: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runtime settings of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub window_days: u32,
    /// `None` means "ask the local clock".
    pub today: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            today: None,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> ContactsResult<Self> {
        validation::positive(i64::from(args.window_days), "window-days")?;
        let today = args.today.as_deref().map(validation::date).transpose()?;
        Ok(Self {
            window_days: args.window_days,
            today,
        })
    }
}
