//! Delivery tests against a local stub standing in for the spreadsheet
//! webhook.

use std::time::Duration;

use axum::{Router, http::StatusCode, response::Redirect, routing::post};
use chrono::NaiveDate;
use ledger::{Transaction, parse};
use sheets::{DeliveryError, SheetsClient};

fn sample_transaction() -> Transaction {
    let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    parse("- 50.00 food cash Lunch at restaurant", today).unwrap()
}

/// Serves `router` on an ephemeral port and returns the endpoint URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn any_2xx_is_success_whatever_the_body() {
    let router = Router::new().route("/", post(|| async { (StatusCode::OK, "Success") }));
    let url = serve(router).await;

    let client = SheetsClient::new(&url).unwrap();
    client.send(&sample_transaction()).await.unwrap();
}

#[tokio::test]
async fn non_2xx_is_reported_as_a_status_failure() {
    let router = Router::new().route(
        "/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = serve(router).await;

    let client = SheetsClient::new(&url).unwrap();
    let err = client.send(&sample_transaction()).await.unwrap_err();
    match err {
        DeliveryError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected a status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn a_stalled_endpoint_is_reported_as_a_timeout() {
    let router = Router::new().route(
        "/",
        post(|| async {
            std::future::pending::<()>().await;
            StatusCode::OK
        }),
    );
    let url = serve(router).await;

    let client = SheetsClient::with_timeout(&url, Duration::from_millis(100)).unwrap();
    let err = client.send(&sample_transaction()).await.unwrap_err();
    match err {
        DeliveryError::Timeout => {}
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn redirects_are_followed() {
    // The Apps Script endpoint redirects POSTs to a result host; 308 keeps
    // the method, so the row still lands.
    let router = Router::new()
        .route("/", post(|| async { Redirect::permanent("/rows") }))
        .route("/rows", post(|| async { (StatusCode::OK, "Success") }));
    let url = serve(router).await;

    let client = SheetsClient::new(&url).unwrap();
    client.send(&sample_transaction()).await.unwrap();
}
