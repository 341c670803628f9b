use felpa_catalog::costs::{
    fixed_costs_total, packaging_cost, VariableRates, INCLUDED_FEE_PER_QUOTE, SPLIT_PART_A,
    SPLIT_PART_B, TAX_RATE,
};
use felpa_catalog::{Finish, Quantity, StickerSize};
use felpa_shared::{money, Amount};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ProductionCost, QuoteBreakdown, RevenueSplit, SaleTotals};

/// Price the production of a sticker run. Total function: clamped inputs
/// in, a cost breakdown out, no failure path.
pub fn production_cost(quantity: Quantity, size: StickerSize, finish: Finish) -> ProductionCost {
    let stickers_per_sheet = size.stickers_per_sheet();
    let sheets = if quantity.is_zero() {
        0
    } else {
        quantity.count().div_ceil(stickers_per_sheet)
    };
    let sheets_dec = Decimal::from(sheets);
    let rates = VariableRates::default();
    let cost_per_sheet = finish.cost_per_sheet();

    ProductionCost {
        size_cm: size,
        quantity,
        finish,
        stickers_per_sheet,
        sheets,
        cost_per_sheet,
        vinyl: sheets_dec * cost_per_sheet,
        fixed: fixed_costs_total(),
        ink: sheets_dec * rates.ink,
        cutting: sheets_dec * rates.cutting,
        special_tape: sheets_dec * rates.special_tape,
        packaging: packaging_cost(quantity),
    }
}

/// Derive margin, tax and totals from a base cost.
///
/// margin = base * rate; subtotal = base + margin; tax on the subtotal;
/// the rounded total always goes up to the next whole unit. Every figure is
/// normalized so the wire never carries trailing zeros picked up from the
/// multiplications.
pub fn sale_totals(base: Amount, margin_rate: Decimal) -> SaleTotals {
    let margin = (base * margin_rate).normalize();
    let subtotal = (base + margin).normalize();
    let tax = (subtotal * TAX_RATE).normalize();
    let total = (subtotal + tax).normalize();
    SaleTotals {
        margin,
        subtotal,
        tax,
        total,
        total_rounded: money::round_up(total),
    }
}

/// Split a benefit base between the two partners. Exact decimal arithmetic
/// keeps part_a + part_b equal to the base.
pub fn benefit_split(base: Amount) -> RevenueSplit {
    RevenueSplit {
        part_a: (base * SPLIT_PART_A).normalize(),
        part_b: (base * SPLIT_PART_B).normalize(),
    }
}

/// Reference total with shipping left out entirely.
pub fn quote_total_excluding_shipping(
    quantity: Quantity,
    size: StickerSize,
    finish: Finish,
) -> i64 {
    let base = production_cost(quantity, size, finish).total();
    sale_totals(base, size.margin_rate()).total_rounded
}

/// Full sale figures with the flat per-quote fee standing in for shipping.
/// A negative fee counts as zero.
pub fn included_fee_totals(
    quantity: Quantity,
    size: StickerSize,
    finish: Finish,
    fee: Amount,
) -> SaleTotals {
    let base = production_cost(quantity, size, finish).total() + fee.max(Decimal::ZERO);
    sale_totals(base, size.margin_rate())
}

/// Total used for saved quotes headed into a combined order: real shipping
/// excluded, the flat fee folded into the base before margin and tax.
pub fn quote_total_with_included_fee(
    quantity: Quantity,
    size: StickerSize,
    finish: Finish,
    fee: Amount,
) -> i64 {
    included_fee_totals(quantity, size, finish, fee).total_rounded
}

/// The operator-facing live quote: real shipping in the base, plus the two
/// sibling totals, the per-sticker price and the partner split.
pub fn live_quote(
    quantity: Quantity,
    size: StickerSize,
    finish: Finish,
    shipping: Amount,
) -> QuoteBreakdown {
    let production = production_cost(quantity, size, finish);
    let shipping = shipping.max(Decimal::ZERO);
    let base = production.total() + shipping;
    let margin_rate = size.margin_rate();
    let sale = sale_totals(base, margin_rate);

    let price_per_sticker = if quantity.is_zero() {
        None
    } else {
        let each = Decimal::from(sale.total_rounded) / Decimal::from(quantity.count());
        Some(each.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    };
    let split = benefit_split(sale.margin + sale.tax);

    QuoteBreakdown {
        total_excluding_shipping: quote_total_excluding_shipping(quantity, size, finish),
        total_with_included_fee: quote_total_with_included_fee(
            quantity,
            size,
            finish,
            INCLUDED_FEE_PER_QUOTE,
        ),
        production,
        shipping,
        base,
        margin_rate,
        sale,
        price_per_sticker,
        benefit_split: split,
    }
}
