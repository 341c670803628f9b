use axum::{extract::State, routing::get, Json, Router};
use felpa_catalog::costs::{
    fixed_costs_total, FixedCost, VariableRates, INCLUDED_FEE_PER_QUOTE, PACKAGING_BLOCK_COST,
    PACKAGING_BLOCK_SIZE, SPLIT_PART_A, SPLIT_PART_B, TAX_RATE,
};
use felpa_catalog::sizes::{MAX_SIZE_CM, MIN_SIZE_CM};
use felpa_catalog::{Finish, FormDefaults, StickerSize};
use felpa_shared::Amount;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub sizes: Vec<SizeRate>,
    pub finishes: Vec<FinishRate>,
    pub fixed_costs: Vec<FixedCostLine>,
    pub fixed_costs_total: Amount,
    pub variable_rates: VariableRates,
    pub packaging_block_size: u32,
    pub packaging_block_cost: Amount,
    pub tax_rate: Decimal,
    pub included_fee_per_quote: Amount,
    pub split_part_a: Decimal,
    pub split_part_b: Decimal,
    pub defaults: FormDefaults,
}

#[derive(Debug, Serialize)]
pub struct SizeRate {
    pub size_cm: u8,
    pub stickers_per_sheet: u32,
    pub margin_rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct FinishRate {
    pub finish: Finish,
    pub label: String,
    pub cost_per_sheet: Amount,
}

#[derive(Debug, Serialize)]
pub struct FixedCostLine {
    pub label: String,
    pub amount: Amount,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/rates", get(get_rates))
}

/// GET /v1/rates
/// The full rate table plus the operator form defaults
async fn get_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    let sizes = (MIN_SIZE_CM..=MAX_SIZE_CM)
        .map(|cm| {
            let size = StickerSize::new(cm);
            SizeRate {
                size_cm: size.cm(),
                stickers_per_sheet: size.stickers_per_sheet(),
                margin_rate: size.margin_rate(),
            }
        })
        .collect();

    let finishes = Finish::all()
        .into_iter()
        .map(|finish| FinishRate {
            finish,
            label: finish.label().to_string(),
            cost_per_sheet: finish.cost_per_sheet(),
        })
        .collect();

    let fixed_costs = FixedCost::all()
        .into_iter()
        .map(|cost| FixedCostLine {
            label: cost.label().to_string(),
            amount: cost.amount(),
        })
        .collect();

    Json(RatesResponse {
        sizes,
        finishes,
        fixed_costs,
        fixed_costs_total: fixed_costs_total(),
        variable_rates: VariableRates::default(),
        packaging_block_size: PACKAGING_BLOCK_SIZE,
        packaging_block_cost: PACKAGING_BLOCK_COST,
        tax_rate: TAX_RATE,
        included_fee_per_quote: INCLUDED_FEE_PER_QUOTE,
        split_part_a: SPLIT_PART_A,
        split_part_b: SPLIT_PART_B,
        defaults: state.settings.defaults.clone(),
    })
}
