use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Quote;
use crate::store::QuoteStore;

const BULLET: &str = "- ";

pub fn run<S: QuoteStore>(store: &S) -> Result<CmdResult> {
    let quotes = store.list_quotes()?;
    Ok(CmdResult::default().with_listed_quotes(quotes))
}

/// One `- <quote>` line per quote, joined with newlines, no trailing newline.
pub fn render(quotes: &[Quote]) -> String {
    quotes
        .iter()
        .map(|q| format!("{}{}", BULLET, q))
        .collect::<Vec<_>>()
        .join("\n")
}
