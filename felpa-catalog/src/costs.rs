use felpa_shared::Amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::finishes::Finish;
use crate::sizes::{Quantity, StickerSize};

/// Tax charged on top of (production cost + margin).
pub const TAX_RATE: Decimal = dec!(0.16);

/// Flat per-quote amount that stands in for shipping when an order combines
/// several quotes. The combined-order math nets the real shipping against
/// one fee per saved quote.
pub const INCLUDED_FEE_PER_QUOTE: Amount = dec!(80);

/// Cut of (margin + tax) each partner takes. Must sum to exactly 1.
pub const SPLIT_PART_A: Decimal = dec!(0.55);
pub const SPLIT_PART_B: Decimal = dec!(0.45);

/// One packaging block covers this many stickers.
pub const PACKAGING_BLOCK_SIZE: u32 = 100;

/// Cost of a single packaging block.
pub const PACKAGING_BLOCK_COST: Amount = dec!(2.10);

/// Fixed costs charged once per quote, in breakdown order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixedCost {
    ShippingBox,
    CuttingMat,
    KraftTape,
    ShippingLabel,
}

impl FixedCost {
    pub fn amount(&self) -> Amount {
        match self {
            FixedCost::ShippingBox => dec!(20.00),
            FixedCost::CuttingMat => dec!(0.76),
            FixedCost::KraftTape => dec!(4.00),
            FixedCost::ShippingLabel => dec!(0.30),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FixedCost::ShippingBox => "Shipping box",
            FixedCost::CuttingMat => "Cutting mat",
            FixedCost::KraftTape => "Kraft tape",
            FixedCost::ShippingLabel => "Shipping label",
        }
    }

    pub fn all() -> [FixedCost; 4] {
        [
            FixedCost::ShippingBox,
            FixedCost::CuttingMat,
            FixedCost::KraftTape,
            FixedCost::ShippingLabel,
        ]
    }
}

/// Sum of every fixed cost. Every quote pays this once, regardless of size.
pub fn fixed_costs_total() -> Amount {
    FixedCost::all().iter().map(|cost| cost.amount()).sum()
}

/// Per-sheet consumable rates applied to every printed sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariableRates {
    pub ink: Amount,
    pub cutting: Amount,
    pub special_tape: Amount,
}

impl VariableRates {
    pub fn per_sheet_total(&self) -> Amount {
        self.ink + self.cutting + self.special_tape
    }
}

impl Default for VariableRates {
    fn default() -> Self {
        Self {
            ink: dec!(0.25),
            cutting: dec!(0.13),
            special_tape: dec!(0.70),
        }
    }
}

/// Packaging is charged per started block of stickers: zero for an empty
/// order, one block up to the block size, two past it, and so on.
pub fn packaging_cost(quantity: Quantity) -> Amount {
    if quantity.is_zero() {
        return Decimal::ZERO;
    }
    let blocks = quantity.count().div_ceil(PACKAGING_BLOCK_SIZE);
    PACKAGING_BLOCK_COST * Decimal::from(blocks)
}

/// Values the quoting form starts from and falls back to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormDefaults {
    pub size_cm: StickerSize,
    pub quantity: Quantity,
    pub finish: Finish,
    pub shipping: Amount,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            size_cm: StickerSize::new(5),
            quantity: Quantity::new(100),
            finish: Finish::PlainVinyl,
            shipping: dec!(159),
        }
    }
}
