use felpa_shared::Amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Vinyl finishes offered for printing.
///
/// `Unknown` absorbs unrecognized wire values and prices at zero, so a stale
/// client degrades to a quote without material cost instead of an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Finish {
    PlainVinyl,
    ClassicHolographic,
    DotsHolographic,
    SandHolographic,
    LaminatedVinyl,
    #[serde(other)]
    Unknown,
}

impl Finish {
    /// Material cost of one printed sheet in this finish.
    pub fn cost_per_sheet(&self) -> Amount {
        match self {
            Finish::PlainVinyl => dec!(5.90),
            Finish::ClassicHolographic => dec!(7.90),
            Finish::DotsHolographic => dec!(7.90),
            Finish::SandHolographic => dec!(10.00),
            Finish::LaminatedVinyl => dec!(17.00),
            Finish::Unknown => Decimal::ZERO,
        }
    }

    /// Customer-facing label used in quote lines.
    pub fn label(&self) -> &'static str {
        match self {
            Finish::PlainVinyl => "Plain vinyl",
            Finish::ClassicHolographic => "Classic holographic",
            Finish::DotsHolographic => "Dots holographic",
            Finish::SandHolographic => "Sand holographic",
            Finish::LaminatedVinyl => "Laminated vinyl",
            Finish::Unknown => "Unknown finish",
        }
    }

    /// Every orderable finish, in menu order.
    pub fn all() -> [Finish; 5] {
        [
            Finish::PlainVinyl,
            Finish::ClassicHolographic,
            Finish::DotsHolographic,
            Finish::SandHolographic,
            Finish::LaminatedVinyl,
        ]
    }
}
