//! # API Facade
//!
//! [`QualifierApi`] is the single entry point for every UI. It owns the store
//! and the configuration, turns command lines into command calls, and hands
//! back a [`CmdResult`]. Printing is left to the caller.
//!
//! The API is generic over [`QuoteStore`] and takes the store by value, so
//! each API instance (and each test) has its own collection. Mutating
//! operations take `&mut self`, which serializes check-then-insert.

use crate::commands::{self, CmdMessage};
use crate::config::QualifierConfig;
use crate::error::{QualifierError, Result};
use crate::model::VariantMode;
use crate::parser::{ParsedCommand, parse_command};
use crate::store::QuoteStore;
use tracing::debug;

pub const LIST_IGNORES_QUOTE: &str = "Quote given with `list` command: quote will be ignored";

pub struct QualifierApi<S: QuoteStore> {
    store: S,
    config: QualifierConfig,
}

impl<S: QuoteStore> QualifierApi<S> {
    pub fn new(store: S, config: QualifierConfig) -> Self {
        Self { store, config }
    }

    /// Parses one command line and runs it.
    pub fn run_command(&mut self, line: &str) -> Result<CmdResult> {
        debug!(line, "running command");
        match parse_command(line)? {
            ParsedCommand::Create {
                mode,
                quote: Some(text),
            } => self.create_quote(text, mode),
            ParsedCommand::Create { mode, quote: None } => {
                Err(QualifierError::MissingQuote(command_name(mode)))
            }
            ParsedCommand::List { quote } => {
                let mut result = self.list_quotes()?;
                if quote.is_some() {
                    result
                        .messages
                        .insert(0, CmdMessage::warning(LIST_IGNORES_QUOTE));
                }
                Ok(result)
            }
        }
    }

    pub fn create_quote(&mut self, text: String, mode: VariantMode) -> Result<CmdResult> {
        commands::create::run(&mut self.store, text, mode, self.config.max_quote_length)
    }

    pub fn list_quotes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &QualifierConfig {
        &self.config
    }
}

fn command_name(mode: VariantMode) -> String {
    match mode {
        VariantMode::Normal => "quote".to_string(),
        other => format!("quote {}", other),
    }
}

pub use crate::commands::list::render as render_listing;
pub use crate::commands::{CmdResult, MessageLevel};
