use felpa_shared::{money, Amount};
use rust_decimal::Decimal;
use serde::Serialize;

/// One shipment covering several saved quotes.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedTotal {
    pub quote_count: usize,
    /// Sum of the per-quote rounded totals.
    pub subtotal: i64,
    /// Shipping left over after the collected fees are applied.
    pub shipping_remainder: Amount,
    pub total: i64,
    pub free_shipping: bool,
}

/// Net the collected per-quote fees against the real shipping cost.
///
/// Each saved quote already absorbed a flat fee in its total, so a combined
/// order only owes whatever those fees fail to cover, charged once. Negative
/// shipping or fee inputs count as zero; the subtotal saturates at the i64
/// limits rather than wrapping.
pub fn combine_totals(
    totals_with_fee: &[i64],
    shipping: Amount,
    fee_per_quote: Amount,
) -> CombinedTotal {
    let quote_count = totals_with_fee.len();
    let subtotal = totals_with_fee
        .iter()
        .fold(0i64, |acc, total| acc.saturating_add(*total));
    let collected = fee_per_quote.max(Decimal::ZERO) * Decimal::from(quote_count as u64);
    let shipping_remainder = (shipping.max(Decimal::ZERO) - collected).max(Decimal::ZERO);
    let total = money::round_up(Decimal::from(subtotal) + shipping_remainder);
    CombinedTotal {
        quote_count,
        subtotal,
        shipping_remainder,
        total,
        free_shipping: shipping_remainder.is_zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fees_short_of_shipping_leave_a_remainder() {
        let combined = combine_totals(&[277], dec!(159), dec!(80));
        assert_eq!(combined.quote_count, 1);
        assert_eq!(combined.subtotal, 277);
        assert_eq!(combined.shipping_remainder, dec!(79));
        assert_eq!(combined.total, 356);
        assert!(!combined.free_shipping);
    }

    #[test]
    fn test_enough_fees_make_shipping_free() {
        let combined = combine_totals(&[277, 383], dec!(159), dec!(80));
        assert_eq!(combined.subtotal, 660);
        assert_eq!(combined.shipping_remainder, Decimal::ZERO);
        assert_eq!(combined.total, 660);
        assert!(combined.free_shipping);
    }

    #[test]
    fn test_zero_fee_passes_shipping_through() {
        let combined = combine_totals(&[70, 168], dec!(159), Decimal::ZERO);
        assert_eq!(combined.shipping_remainder, dec!(159));
        assert_eq!(combined.total, 397);
        assert!(!combined.free_shipping);
    }

    #[test]
    fn test_no_quotes_still_charge_shipping() {
        let combined = combine_totals(&[], dec!(159), dec!(80));
        assert_eq!(combined.quote_count, 0);
        assert_eq!(combined.subtotal, 0);
        assert_eq!(combined.total, 159);
    }

    #[test]
    fn test_negative_inputs_count_as_zero() {
        let combined = combine_totals(&[100], dec!(-30), dec!(80));
        assert_eq!(combined.shipping_remainder, Decimal::ZERO);
        assert_eq!(combined.total, 100);

        let combined = combine_totals(&[100], dec!(50), dec!(-80));
        assert_eq!(combined.shipping_remainder, dec!(50));
        assert_eq!(combined.total, 150);
    }

    #[test]
    fn test_fractional_remainder_rounds_up_once() {
        let combined = combine_totals(&[200], dec!(120.5), dec!(80));
        assert_eq!(combined.shipping_remainder, dec!(40.5));
        assert_eq!(combined.total, 241);
    }

    #[test]
    fn test_huge_totals_saturate_instead_of_wrapping() {
        let combined = combine_totals(&[i64::MAX, 1], dec!(0), dec!(80));
        assert_eq!(combined.subtotal, i64::MAX);
        assert_eq!(combined.total, i64::MAX);

        let combined = combine_totals(&[i64::MIN, -1], dec!(0), dec!(0));
        assert_eq!(combined.subtotal, i64::MIN);
    }
}
