use crate::aggregate::{combine_totals, CombinedTotal};
use crate::models::SavedQuote;
use felpa_catalog::costs::INCLUDED_FEE_PER_QUOTE;
use felpa_catalog::{Finish, Quantity, StickerSize};
use felpa_quote::{benefit_split, RevenueSplit};
use felpa_shared::{Amount, ClientName};
use serde::Serialize;
use uuid::Uuid;

/// Saved quotes for the current operator session, in save order.
pub struct QuoteSession {
    quotes: Vec<SavedQuote>,
}

impl QuoteSession {
    pub fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// Capture the given form state into the session. Saving the same form
    /// twice is allowed; each save is its own record.
    pub fn save_quote(
        &mut self,
        client_name: ClientName,
        size_cm: StickerSize,
        quantity: Quantity,
        finish: Finish,
    ) -> SavedQuote {
        let quote = SavedQuote::capture(client_name, size_cm, quantity, finish);
        self.quotes.push(quote.clone());
        quote
    }

    /// Remove a saved quote by id, returning it.
    pub fn remove_quote(&mut self, id: &Uuid) -> Result<SavedQuote, SessionError> {
        let index = self
            .quotes
            .iter()
            .position(|quote| quote.id == *id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        Ok(self.quotes.remove(index))
    }

    pub fn get(&self, id: &Uuid) -> Option<&SavedQuote> {
        self.quotes.iter().find(|quote| quote.id == *id)
    }

    pub fn quotes(&self) -> &[SavedQuote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Combined total for every saved quote under one shared shipment.
    pub fn combined_total(&self, shipping: Amount) -> CombinedTotal {
        let totals: Vec<i64> = self
            .quotes
            .iter()
            .map(|quote| quote.total_with_included_fee)
            .collect();
        combine_totals(&totals, shipping, INCLUDED_FEE_PER_QUOTE)
    }

    /// Partner view over everything saved: profit and tax pooled, then
    /// split at the agreed rates.
    pub fn revenue_summary(&self) -> RevenueSummary {
        let benefit_base: Amount = self
            .quotes
            .iter()
            .map(|quote| quote.profit_included + quote.tax_included)
            .sum();
        RevenueSummary {
            quote_count: self.quotes.len(),
            benefit_base,
            split: benefit_split(benefit_base),
        }
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueSummary {
    pub quote_count: usize,
    pub benefit_base: Amount,
    pub split: RevenueSplit,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Quote not found: {0}")]
    NotFound(String),
}
