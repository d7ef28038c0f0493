use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Quote, VariantMode};
use crate::store::{InsertOutcome, QuoteStore};
use tracing::{debug, warn};

pub const EMPTY_QUOTE: &str = "Empty quote";
pub const PARTIAL_TRANSFORM: &str = "Quote too long, only partially transformed";
pub const DUPLICATE_QUOTE: &str = "Quote has already been added previously";

/// Builds a quote and registers it with the store.
///
/// Length and transform failures abort before the store is touched. An empty
/// quote, a partial transform and a duplicate are reported as warnings; the
/// quote is still returned in `affected_quotes` in all three cases. Warnings
/// raised before a failure are logged, since no result carries them back.
pub fn run<S: QuoteStore>(
    store: &mut S,
    raw_text: String,
    mode: VariantMode,
    max_length: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if raw_text.is_empty() {
        result.add_message(CmdMessage::warning(EMPTY_QUOTE));
    }

    let quote = match Quote::new(raw_text, mode, max_length) {
        Ok(quote) => quote,
        Err(e) => {
            for notice in result.warnings() {
                warn!(error = %e, "{}", notice.content);
            }
            return Err(e);
        }
    };
    if quote.is_partial() {
        result.add_message(CmdMessage::warning(PARTIAL_TRANSFORM));
    }

    match store.add_quote(&quote)? {
        InsertOutcome::Inserted => {
            debug!(mode = %mode, display = %quote, "quote stored");
            result.add_message(CmdMessage::success(format!("Quote added: {}", quote)));
        }
        InsertOutcome::Duplicate => {
            debug!(mode = %mode, display = %quote, "duplicate quote skipped");
            result.add_message(CmdMessage::warning(DUPLICATE_QUOTE));
        }
    }

    result.affected_quotes.push(quote);
    Ok(result)
}
