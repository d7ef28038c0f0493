//! # Storage Layer
//!
//! Quotes are kept behind the [`QuoteStore`] trait so the API can be handed
//! whatever backend the caller owns. The only implementation is
//! [`memory::InMemoryStore`]: quotes live as long as the process does.
//!
//! ## Deduplication
//!
//! Two quotes are duplicates when their display texts are equal, regardless
//! of raw text or mode. `quote "waww"` and `quote uwu "rawr"` collide.
//!
//! A duplicate is not an error. [`QuoteStore::add_quote`] reports it through
//! [`InsertOutcome::Duplicate`] and the store is left untouched.

use crate::error::Result;
use crate::model::Quote;

pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
}

/// Ordered, duplicate-free collection of quotes.
pub trait QuoteStore {
    /// Append a quote unless one with the same display text is already stored.
    fn add_quote(&mut self, quote: &Quote) -> Result<InsertOutcome>;

    /// All stored quotes, in insertion order.
    fn list_quotes(&self) -> Result<Vec<Quote>>;
}
