use chrono::{Local, NaiveDate};
use std::io::{self, Write};

use crate::config::Config;
use crate::model::Directory;

/// Everything a session needs: the address book and its settings.
pub struct CLIContext {
    pub directory: Directory,
    pub config: Config,
}

impl CLIContext {
    pub fn new(config: Config) -> Self {
        Self {
            directory: Directory::new(),
            config,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// The pinned date from the config, or the local date.
    pub fn today(&self) -> NaiveDate {
        self.config
            .today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
