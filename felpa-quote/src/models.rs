use felpa_catalog::{Finish, Quantity, StickerSize};
use felpa_shared::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Production cost of one sticker run, broken out per component.
///
/// Everything before margin and tax: sheet material, fixed overhead,
/// per-sheet consumables, packaging. Shipping is deliberately absent; each
/// total variant decides what stands in for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCost {
    pub size_cm: StickerSize,
    pub quantity: Quantity,
    pub finish: Finish,
    pub stickers_per_sheet: u32,
    pub sheets: u32,
    pub cost_per_sheet: Amount,
    pub vinyl: Amount,
    pub fixed: Amount,
    pub ink: Amount,
    pub cutting: Amount,
    pub special_tape: Amount,
    pub packaging: Amount,
}

impl ProductionCost {
    /// Every component summed: the base the margin applies to.
    pub fn total(&self) -> Amount {
        self.vinyl + self.fixed + self.ink + self.cutting + self.special_tape + self.packaging
    }
}

/// Margin, tax and totals derived from one base cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleTotals {
    pub margin: Amount,
    pub subtotal: Amount,
    pub tax: Amount,
    pub total: Amount,
    pub total_rounded: i64,
}

/// How (margin + tax) divides between the two partners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSplit {
    pub part_a: Amount,
    pub part_b: Amount,
}

/// The full operator-facing view of one live quote.
///
/// Carries all three totals side by side so they are never confused: the
/// live total (real shipping in the base), the reference total without
/// shipping, and the combined-order variant with the flat fee folded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub production: ProductionCost,
    pub shipping: Amount,
    pub base: Amount,
    pub margin_rate: Decimal,
    pub sale: SaleTotals,
    pub price_per_sticker: Option<Amount>,
    pub benefit_split: RevenueSplit,
    pub total_excluding_shipping: i64,
    pub total_with_included_fee: i64,
}
