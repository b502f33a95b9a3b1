//! Delivery of parsed transactions to the spreadsheet webhook (a Google
//! Apps Script endpoint in the usual deployment). One POST per transaction,
//! no retry; the caller decides what to tell the user when delivery fails.

use std::time::Duration;

use chrono::Utc;
use ledger::Transaction;
use reqwest::{Client, StatusCode, redirect};

pub use payload::{Kind, Payload};

mod payload;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("tally/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("request timed out")]
    Timeout,
    #[error("spreadsheet returned {0}")]
    Status(StatusCode),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl DeliveryError {
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DeliveryError::Timeout
        } else {
            DeliveryError::Network(err)
        }
    }
}

/// HTTP client for the spreadsheet endpoint. Cheap to clone; the inner
/// `reqwest::Client` is shared.
#[derive(Clone, Debug)]
pub struct SheetsClient {
    client: Client,
    url: String,
}

impl SheetsClient {
    /// Builds the client with the default delivery timeout and redirect
    /// following the Apps Script deployment needs (it answers with a
    /// redirect to a one-off result host).
    pub fn new(url: &str) -> Result<Self, reqwest::Error> {
        Self::with_timeout(url, DELIVERY_TIMEOUT)
    }

    /// Same as [`SheetsClient::new`] with an explicit delivery timeout.
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Posts one transaction as a spreadsheet row. Any 2xx answer counts as
    /// success; the body is logged but never interpreted.
    pub async fn send(&self, transaction: &Transaction) -> Result<(), DeliveryError> {
        let payload = Payload::new(transaction, Utc::now());
        tracing::debug!(?payload, "delivering transaction to the spreadsheet");

        let resp = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(DeliveryError::from_transport)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "spreadsheet rejected the transaction");
            return Err(DeliveryError::Status(status));
        }

        if let Ok(body) = resp.text().await {
            tracing::debug!(%status, body, "spreadsheet accepted the transaction");
        }
        Ok(())
    }
}
