use super::{InsertOutcome, QuoteStore};
use crate::error::Result;
use crate::model::Quote;

/// In-memory storage. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    quotes: Vec<Quote>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteStore for InMemoryStore {
    fn add_quote(&mut self, quote: &Quote) -> Result<InsertOutcome> {
        if self
            .quotes
            .iter()
            .any(|q| q.display_text() == quote.display_text())
        {
            return Ok(InsertOutcome::Duplicate);
        }
        self.quotes.push(quote.clone());
        Ok(InsertOutcome::Inserted)
    }

    fn list_quotes(&self) -> Result<Vec<Quote>> {
        Ok(self.quotes.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::DEFAULT_MAX_QUOTE_LENGTH;
    use crate::model::VariantMode;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_quotes(mut self, texts: &[&str]) -> Self {
            for text in texts {
                self = self.with_quote(text, VariantMode::Normal);
            }
            self
        }

        pub fn with_quote(mut self, text: &str, mode: VariantMode) -> Self {
            let quote = Quote::new(text, mode, DEFAULT_MAX_QUOTE_LENGTH).unwrap();
            self.store.add_quote(&quote).unwrap();
            self
        }
    }
}
