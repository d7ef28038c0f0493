use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qualifier", bin_name = "qualifier", version)]
#[command(
    about = "Keep a list of quotes, optionally uwu-ified or in pig latin",
    long_about = None
)]
pub struct Cli {
    /// Command to run. Keep the quote marks from the shell, e.g. `quote uwu '"hello"'`.
    /// Reads commands from stdin when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub line: Vec<String>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory containing config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// The positional words as a single command line, if any were given.
    pub fn command_line(&self) -> Option<String> {
        if self.line.is_empty() {
            None
        } else {
            Some(self.line.join(" "))
        }
    }
}
