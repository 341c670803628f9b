use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use felpa_catalog::costs::INCLUDED_FEE_PER_QUOTE;
use felpa_catalog::{Finish, Quantity, StickerSize};
use felpa_order::{combine_totals, CombinedTotal, RevenueSummary, SavedQuote};
use felpa_quote::{live_quote, QuoteBreakdown};
use felpa_shared::models::events::QuoteSavedEvent;
use felpa_shared::{Amount, ClientName};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub size_cm: StickerSize,
    pub quantity: Quantity,
    pub finish: Finish,
    pub shipping: Option<Amount>,
}

#[derive(Debug, Deserialize)]
pub struct SaveQuoteRequest {
    #[serde(default)]
    pub client_name: ClientName,
    pub size_cm: StickerSize,
    pub quantity: Quantity,
    pub finish: Finish,
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub shipping: Option<Amount>,
}

#[derive(Debug, Deserialize)]
pub struct CombineRequest {
    pub totals_with_fee: Vec<i64>,
    pub shipping: Amount,
    pub fee_per_quote: Option<Amount>,
}

#[derive(Debug, Serialize)]
pub struct SessionSummaryResponse {
    pub combined: CombinedTotal,
    pub revenue: RevenueSummary,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/quotes/preview", post(preview_quote))
        .route("/v1/quotes", post(save_quote).get(list_quotes))
        .route("/v1/quotes/summary", get(session_summary))
        .route("/v1/quotes/combine", post(combine_quotes))
        .route("/v1/quotes/{id}", delete(remove_quote))
}

/// POST /v1/quotes/preview
/// Live quote breakdown for the given form state
async fn preview_quote(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Json<QuoteBreakdown> {
    let shipping = req.shipping.unwrap_or(state.settings.defaults.shipping);
    Json(live_quote(req.quantity, req.size_cm, req.finish, shipping))
}

/// POST /v1/quotes
/// Capture the form state into the session
async fn save_quote(
    State(state): State<AppState>,
    Json(req): Json<SaveQuoteRequest>,
) -> (StatusCode, Json<SavedQuote>) {
    let quote = {
        let mut session = state.session.write().await;
        session.save_quote(req.client_name, req.size_cm, req.quantity, req.finish)
    };

    let event = QuoteSavedEvent {
        quote_id: quote.id,
        size_cm: quote.size_cm.cm(),
        quantity: quote.quantity.count(),
        finish: quote.finish_label.clone(),
        total_with_included_fee: quote.total_with_included_fee,
        timestamp: Utc::now().timestamp(),
    };
    state.feedback.note_saved(&event).await;

    (StatusCode::CREATED, Json(quote))
}

/// GET /v1/quotes
/// Every quote saved in this session, in save order
async fn list_quotes(State(state): State<AppState>) -> Json<Vec<SavedQuote>> {
    let session = state.session.read().await;
    Json(session.quotes().to_vec())
}

/// DELETE /v1/quotes/{id}
/// Drop a saved quote from the session
async fn remove_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.write().await;
    session
        .remove_quote(&id)
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/quotes/summary?shipping=
/// Combined totals plus the partner revenue view for the session
async fn session_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Json<SessionSummaryResponse> {
    let shipping = params.shipping.unwrap_or(state.settings.defaults.shipping);
    let session = state.session.read().await;
    Json(SessionSummaryResponse {
        combined: session.combined_total(shipping),
        revenue: session.revenue_summary(),
    })
}

/// POST /v1/quotes/combine
/// Combined total over explicit per-quote totals
async fn combine_quotes(Json(req): Json<CombineRequest>) -> Json<CombinedTotal> {
    let fee = req.fee_per_quote.unwrap_or(INCLUDED_FEE_PER_QUOTE);
    Json(combine_totals(&req.totals_with_fee, req.shipping, fee))
}
