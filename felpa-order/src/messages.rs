use crate::aggregate::combine_totals;
use crate::models::SavedQuote;
use felpa_shared::{money, Amount};
use rust_decimal::Decimal;

/// Opening line shared by both message forms.
pub const GREETING: &str = "All set, here is your quote:";

/// Appended when the customer owes nothing for shipping.
pub const FREE_SHIPPING_NOTE: &str = "Free shipping 🙌";

/// Body of the multi form when nothing has been saved yet.
pub const EMPTY_NOTE: &str = "— No saved quotes —";

fn quote_line(size_cm: u8, quantity: u32, finish_label: &str, total: i64) -> String {
    format!(
        "- {} cm · {} stickers · {} — {}",
        size_cm,
        quantity,
        finish_label,
        money::format_whole(total)
    )
}

/// Customer message for one live quote. `total` is the live rounded total,
/// `shipping` the real shipping the customer was quoted.
pub fn single_quote_message(
    size_cm: u8,
    quantity: u32,
    finish_label: &str,
    total: i64,
    shipping: Amount,
) -> String {
    let mut lines = vec![GREETING.to_string()];
    lines.push(quote_line(size_cm, quantity, finish_label, total));
    if shipping <= Decimal::ZERO {
        lines.push(FREE_SHIPPING_NOTE.to_string());
    }
    lines.join("\n")
}

/// Customer message covering every saved quote under one shipment.
pub fn multi_quote_message(
    quotes: &[SavedQuote],
    shipping: Amount,
    fee_per_quote: Amount,
) -> String {
    let mut lines = vec![GREETING.to_string()];
    if quotes.is_empty() {
        lines.push(EMPTY_NOTE.to_string());
        return lines.join("\n");
    }

    for quote in quotes {
        lines.push(quote_line(
            quote.size_cm.cm(),
            quote.quantity.count(),
            &quote.finish_label,
            quote.total_with_included_fee,
        ));
    }

    let totals: Vec<i64> = quotes.iter().map(|q| q.total_with_included_fee).collect();
    let combined = combine_totals(&totals, shipping, fee_per_quote);
    lines.push(format!(
        "Total for everything: {}",
        money::format_whole(combined.total)
    ));
    if combined.free_shipping {
        lines.push(FREE_SHIPPING_NOTE.to_string());
    }
    lines.join("\n")
}
