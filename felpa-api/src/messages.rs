use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use felpa_catalog::costs::INCLUDED_FEE_PER_QUOTE;
use felpa_catalog::{Finish, Quantity, StickerSize};
use felpa_order::messages::{multi_quote_message, single_quote_message};
use felpa_quote::live_quote;
use felpa_shared::models::events::{MessageComposedEvent, MessageKind};
use felpa_shared::Amount;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SingleMessageRequest {
    pub size_cm: StickerSize,
    pub quantity: Quantity,
    pub finish: Finish,
    pub shipping: Option<Amount>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MultiMessageRequest {
    pub shipping: Option<Amount>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub text: String,
    pub copied: bool,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/messages/single", post(compose_single))
        .route("/v1/messages/multi", post(compose_multi))
}

/// POST /v1/messages/single
/// Customer message for one live quote, copied for the operator
async fn compose_single(
    State(state): State<AppState>,
    Json(req): Json<SingleMessageRequest>,
) -> Json<MessageResponse> {
    let shipping = req.shipping.unwrap_or(state.settings.defaults.shipping);
    let breakdown = live_quote(req.quantity, req.size_cm, req.finish, shipping);
    let text = single_quote_message(
        req.size_cm.cm(),
        req.quantity.count(),
        req.finish.label(),
        breakdown.sale.total_rounded,
        breakdown.shipping,
    );

    let event = MessageComposedEvent {
        kind: MessageKind::Single,
        quote_count: 1,
        text: text.clone(),
        timestamp: Utc::now().timestamp(),
    };
    let copied = state.feedback.copy_message(&event).await;
    state.feedback.tap().await;

    Json(MessageResponse { text, copied })
}

/// POST /v1/messages/multi
/// Customer message covering every saved quote under one shipment
async fn compose_multi(
    State(state): State<AppState>,
    Json(req): Json<MultiMessageRequest>,
) -> Json<MessageResponse> {
    let shipping = req.shipping.unwrap_or(state.settings.defaults.shipping);
    let (text, quote_count) = {
        let session = state.session.read().await;
        (
            multi_quote_message(session.quotes(), shipping, INCLUDED_FEE_PER_QUOTE),
            session.len(),
        )
    };

    let event = MessageComposedEvent {
        kind: MessageKind::Combined,
        quote_count,
        text: text.clone(),
        timestamp: Utc::now().timestamp(),
    };
    let copied = state.feedback.copy_message(&event).await;
    state.feedback.tap().await;

    Json(MessageResponse { text, copied })
}
