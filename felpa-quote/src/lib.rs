pub mod calculator;
pub mod models;

pub use calculator::{
    benefit_split, included_fee_totals, live_quote, production_cost,
    quote_total_excluding_shipping, quote_total_with_included_fee, sale_totals,
};
pub use models::{ProductionCost, QuoteBreakdown, RevenueSplit, SaleTotals};
