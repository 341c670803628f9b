use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use felpa_api::{app, settings::Settings, state::AppState};
use felpa_core::{FeedbackChannel, MemoryClipboard, NullCue};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let feedback = FeedbackChannel::new(Arc::new(MemoryClipboard::new()), Arc::new(NullCue));
    app(AppState::new(Settings::default(), feedback))
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preview_returns_the_live_breakdown() {
    let app = test_app();

    // Shipping left out, so the configured default of 159 applies.
    let response = app
        .oneshot(post_json(
            "/v1/quotes/preview",
            json!({"size_cm": 5, "quantity": 100, "finish": "PLAIN_VINYL"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["production"]["stickers_per_sheet"], 13);
    assert_eq!(body["production"]["sheets"], 8);
    assert_eq!(body["sale"]["tax"], "56.5312");
    assert_eq!(body["sale"]["total_rounded"], 410);
    assert_eq!(body["price_per_sticker"], "4.1");
    assert_eq!(body["total_excluding_shipping"], 141);
    assert_eq!(body["total_with_included_fee"], 277);
}

#[tokio::test]
async fn test_preview_clamps_out_of_range_input() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/v1/quotes/preview",
            json!({"size_cm": 25, "quantity": -5, "finish": "PLAIN_VINYL", "shipping": 159}),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["production"]["size_cm"], 10);
    assert_eq!(body["production"]["quantity"], 0);
    assert_eq!(body["sale"]["total_rounded"], 284);
    assert!(body["price_per_sticker"].is_null());
}

#[tokio::test]
async fn test_preview_prices_unknown_finish_at_zero() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/v1/quotes/preview",
            json!({"size_cm": 5, "quantity": 100, "finish": "GLITTER_CHROME"}),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["production"]["finish"], "UNKNOWN");
    assert_eq!(body["production"]["vinyl"], "0");
    assert_eq!(body["sale"]["total_rounded"], 330);
}

#[tokio::test]
async fn test_save_list_remove_lifecycle() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/quotes",
            json!({"client_name": "Dana", "size_cm": 5, "quantity": 100, "finish": "PLAIN_VINYL"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved = body_json(response).await;
    assert_eq!(saved["total_with_included_fee"], 277);
    assert_eq!(saved["client_name"], "Dana");
    let id = saved["id"].as_str().unwrap().to_string();

    let response = app.clone().oneshot(get("/v1/quotes")).await.unwrap();
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(delete(&format!("/v1/quotes/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/v1/quotes")).await.unwrap();
    let list = body_json(response).await;
    assert!(list.as_array().unwrap().is_empty());

    // Removing the same id again has nothing left to hit.
    let response = app
        .oneshot(delete(&format!("/v1/quotes/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Quote not found"));
}

#[tokio::test]
async fn test_summary_nets_fees_against_shipping() {
    let app = test_app();

    for size in [5, 7] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/v1/quotes",
                json!({"size_cm": size, "quantity": 100, "finish": "PLAIN_VINYL"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get("/v1/quotes/summary?shipping=159"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["combined"]["subtotal"], 660);
    assert_eq!(body["combined"]["total"], 660);
    assert_eq!(body["combined"]["free_shipping"], true);
    assert_eq!(body["revenue"]["quote_count"], 2);
}

#[tokio::test]
async fn test_summary_with_one_quote_owes_the_remainder() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/v1/quotes",
            json!({"size_cm": 5, "quantity": 100, "finish": "PLAIN_VINYL"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(get("/v1/quotes/summary?shipping=159"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["combined"]["shipping_remainder"], "79");
    assert_eq!(body["combined"]["total"], 356);
    assert_eq!(body["combined"]["free_shipping"], false);
}

#[tokio::test]
async fn test_combine_endpoint_defaults_the_fee() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/quotes/combine",
            json!({"totals_with_fee": [277, 383], "shipping": 159}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 660);
    assert_eq!(body["free_shipping"], true);

    let response = app
        .oneshot(post_json(
            "/v1/quotes/combine",
            json!({"totals_with_fee": [70, 168], "shipping": 159, "fee_per_quote": 0}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 397);
    assert_eq!(body["free_shipping"], false);
}

#[tokio::test]
async fn test_single_message_notes_free_shipping() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/v1/messages/single",
            json!({"size_cm": 5, "quantity": 100, "finish": "PLAIN_VINYL", "shipping": 0}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(
        body["text"],
        "All set, here is your quote:\n- 5 cm · 100 stickers · Plain vinyl — $141\nFree shipping 🙌"
    );
    assert_eq!(body["copied"], true);
}

#[tokio::test]
async fn test_multi_message_empty_session() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/v1/messages/multi", json!({})))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["text"], "All set, here is your quote:\n— No saved quotes —");
    assert_eq!(body["copied"], true);
}

#[tokio::test]
async fn test_multi_message_totals_every_saved_quote() {
    let app = test_app();

    for size in [5, 7] {
        app.clone()
            .oneshot(post_json(
                "/v1/quotes",
                json!({"size_cm": size, "quantity": 100, "finish": "PLAIN_VINYL"}),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(post_json("/v1/messages/multi", json!({"shipping": 159})))
        .await
        .unwrap();
    let body = body_json(response).await;
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("- 5 cm · 100 stickers · Plain vinyl — $277"));
    assert!(text.contains("- 7 cm · 100 stickers · Plain vinyl — $383"));
    assert!(text.contains("Total for everything: $660"));
    assert!(text.contains("Free shipping 🙌"));
}

#[tokio::test]
async fn test_rates_snapshot() {
    let app = test_app();

    let response = app.oneshot(get("/v1/rates")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["sizes"].as_array().unwrap().len(), 10);
    assert_eq!(body["sizes"][0]["stickers_per_sheet"], 50);
    assert_eq!(body["finishes"].as_array().unwrap().len(), 5);
    assert_eq!(body["fixed_costs_total"], "25.06");
    assert_eq!(body["tax_rate"], "0.16");
    assert_eq!(body["packaging_block_cost"], "2.10");
    assert_eq!(body["included_fee_per_quote"], "80");
    assert_eq!(body["defaults"]["quantity"], 100);
}
