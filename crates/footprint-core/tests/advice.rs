use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use footprint_core::advice::{AdviceClient, AdviceSequencer};
use footprint_core::calc::compute_footprint;
use footprint_core::error::FootprintError;
use footprint_core::types::Measurements;

fn sample() -> Measurements {
    Measurements {
        transportation_km: 50.0,
        energy_kwh: 20.0,
        food_meals: 10.0,
        waste_kg: 5.0,
        purchases: 2.0,
    }
}

/// Serves `app` on an ephemeral port and returns the advice URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/advice")
}

#[tokio::test]
async fn round_trip_returns_the_server_text() {
    let app = Router::new().route(
        "/advice",
        post(|Json(_body): Json<Value>| async move { Json(json!({ "advice": "bike more" })) }),
    );
    let url = serve(app).await;
    let client = AdviceClient::new(url, Duration::from_secs(5)).unwrap();

    let result = compute_footprint(&sample()).unwrap();
    let text = client
        .request_advice(result.total, &result.parts)
        .await
        .unwrap();
    assert_eq!(text, "bike more");
}

#[tokio::test]
async fn request_body_carries_total_and_breakdown() {
    // Echo the request back through the advice field to observe the wire
    // shape from the client side.
    let app = Router::new().route(
        "/advice",
        post(|Json(body): Json<Value>| async move {
            Json(json!({ "advice": body.to_string() }))
        }),
    );
    let url = serve(app).await;
    let client = AdviceClient::new(url, Duration::from_secs(5)).unwrap();

    let result = compute_footprint(&sample()).unwrap();
    let echoed = client
        .request_advice(result.total, &result.parts)
        .await
        .unwrap();

    assert!(echoed.contains("\"total\""));
    assert!(echoed.contains("\"breakdown\""));
    assert!(echoed.contains("\"Transportation\""));
    assert!(echoed.contains("\"Purchasing\""));
}

#[tokio::test]
async fn empty_advice_degrades_to_placeholder() {
    let app = Router::new().route("/advice", post(|| async { Json(json!({ "advice": "" })) }));
    let url = serve(app).await;
    let client = AdviceClient::new(url, Duration::from_secs(5)).unwrap();

    let result = compute_footprint(&sample()).unwrap();
    let text = client
        .request_advice(result.total, &result.parts)
        .await
        .unwrap();
    assert_eq!(text, "No advice returned.");
}

#[tokio::test]
async fn unexpected_shape_is_a_response_error() {
    let app = Router::new().route(
        "/advice",
        post(|| async { Json(json!({ "message": "wrong shape" })) }),
    );
    let url = serve(app).await;
    let client = AdviceClient::new(url, Duration::from_secs(5)).unwrap();

    let result = compute_footprint(&sample()).unwrap();
    let err = client
        .request_advice(result.total, &result.parts)
        .await
        .unwrap_err();
    assert!(matches!(err, FootprintError::AdviceResponse(_)));
}

#[tokio::test]
async fn non_json_response_is_a_response_error() {
    let app = Router::new().route("/advice", post(|| async { "definitely not json" }));
    let url = serve(app).await;
    let client = AdviceClient::new(url, Duration::from_secs(5)).unwrap();

    let result = compute_footprint(&sample()).unwrap();
    let err = client
        .request_advice(result.total, &result.parts)
        .await
        .unwrap_err();
    assert!(matches!(err, FootprintError::AdviceResponse(_)));
}

#[tokio::test]
async fn error_status_is_a_transport_error() {
    let app = Router::new().route("/advice", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let url = serve(app).await;
    let client = AdviceClient::new(url, Duration::from_secs(5)).unwrap();

    let result = compute_footprint(&sample()).unwrap();
    let err = client
        .request_advice(result.total, &result.parts)
        .await
        .unwrap_err();
    assert!(matches!(err, FootprintError::AdviceTransport(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let client =
        AdviceClient::new("http://127.0.0.1:1/advice", Duration::from_secs(1)).unwrap();

    let result = compute_footprint(&sample()).unwrap();
    let err = client
        .request_advice(result.total, &result.parts)
        .await
        .unwrap_err();
    assert!(matches!(err, FootprintError::AdviceTransport(_)));
}

#[test]
fn only_the_latest_issued_request_is_current() {
    let sequencer = AdviceSequencer::new();

    let first = sequencer.issue();
    assert!(sequencer.is_current(first));

    let second = sequencer.issue();
    assert!(!sequencer.is_current(first), "superseded response must be discarded");
    assert!(sequencer.is_current(second));

    let third = sequencer.issue();
    assert!(sequencer.is_current(third));
    assert!(!sequencer.is_current(second));
}
