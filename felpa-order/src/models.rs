use chrono::{DateTime, Utc};
use felpa_catalog::costs::INCLUDED_FEE_PER_QUOTE;
use felpa_catalog::{Finish, Quantity, StickerSize};
use felpa_quote::{included_fee_totals, quote_total_excluding_shipping};
use felpa_shared::{Amount, ClientName};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quote captured into the current session.
///
/// Carries every figure the combined order and the partner summary need
/// later, so edits to the live form never disturb a saved quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuote {
    pub id: Uuid,
    pub client_name: ClientName,
    pub size_cm: StickerSize,
    pub quantity: Quantity,
    pub finish: Finish,
    pub finish_label: String,
    pub margin_rate: Decimal,
    pub total_excluding_shipping: i64,
    /// The total saved quotes contribute to a combined order: real shipping
    /// left out, the flat fee folded in before margin and tax.
    pub total_with_included_fee: i64,
    /// Margin portion of the included-fee sale, before rounding.
    pub profit_included: Amount,
    /// Tax portion of the included-fee sale, before rounding.
    pub tax_included: Amount,
    pub included_fee: Amount,
    pub saved_at: DateTime<Utc>,
}

impl SavedQuote {
    /// Price the given form state and freeze it as a record.
    pub fn capture(
        client_name: ClientName,
        size_cm: StickerSize,
        quantity: Quantity,
        finish: Finish,
    ) -> Self {
        let fee = INCLUDED_FEE_PER_QUOTE;
        let sale = included_fee_totals(quantity, size_cm, finish, fee);
        Self {
            id: Uuid::new_v4(),
            client_name,
            size_cm,
            quantity,
            finish,
            finish_label: finish.label().to_string(),
            margin_rate: size_cm.margin_rate(),
            total_excluding_shipping: quote_total_excluding_shipping(quantity, size_cm, finish),
            total_with_included_fee: sale.total_rounded,
            profit_included: sale.margin,
            tax_included: sale.tax,
            included_fee: fee,
            saved_at: Utc::now(),
        }
    }
}
