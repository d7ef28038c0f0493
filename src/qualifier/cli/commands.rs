use super::print::{print_messages, print_quotes};
use super::setup::Cli;
use clap::Parser;
use directories::ProjectDirs;
use qualifier::api::QualifierApi;
use qualifier::commands::CmdMessage;
use qualifier::config::QualifierConfig;
use qualifier::error::Result;
use qualifier::store::memory::InMemoryStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "quote> ";

struct AppContext {
    api: QualifierApi<InMemoryStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command_line() {
        Some(line) => handle_line(&mut ctx, &line),
        None => run_interactive(&mut ctx),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(default_config_dir);
    let config = match &config_dir {
        Some(dir) => QualifierConfig::load(dir)?,
        None => QualifierConfig::default(),
    };
    info!(?config_dir, max_quote_length = config.max_quote_length, "configuration loaded");

    Ok(AppContext {
        api: QualifierApi::new(InMemoryStore::new(), config),
    })
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "qualifier", "qualifier").map(|dirs| dirs.config_dir().to_path_buf())
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Result<()> {
    let result = ctx.api.run_command(line)?;
    print_messages(&result.messages);
    print_quotes(&result.listed_quotes);
    Ok(())
}

/// Runs every stdin line against the same store until EOF. Command errors
/// are reported and the loop continues; only I/O errors end it.
fn run_interactive(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();
    debug!(show_prompt, "reading commands from stdin");

    prompt(show_prompt)?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            if let Err(e) = handle_line(ctx, &line) {
                print_messages(&[CmdMessage::error(format!("Error: {}", e))]);
            }
        }
        prompt(show_prompt)?;
    }
    if show_prompt {
        println!();
    }
    Ok(())
}

fn prompt(show: bool) -> Result<()> {
    if show {
        print!("{}", PROMPT);
        io::stdout().flush()?;
    }
    Ok(())
}
