use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "flashstack", version, about = "A simple flashcard program")]
pub struct Cli {
    /// Stack file to load on start and save to (tab-separated item/answer lines)
    pub file: Option<PathBuf>,

    /// Where the previous file is kept while saving (defaults to <FILE>.bak)
    #[arg(long, value_name = "PATH")]
    pub backup: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
