//! HTTP JSON transport for the ledger service.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::LedgerService;
use crate::common::error::{ConverterError, Result};
use crate::common::logging::{self, LogLevel};
use crate::types::subaccount::Subaccount;

/// Ledger service reached over HTTP.
///
/// Each operation is a `POST {base_url}/{operation}` with a JSON body carrying
/// the account text and the 32-byte subaccount. No client-side timeout or
/// retry is applied; both belong to the service.
pub struct HttpLedgerService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLedgerService {
    /// Creates a transport for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::ConfigError`] when `base_url` is empty or
    /// the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ConverterError::ConfigError(
                "service URL is empty".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ConverterError::ConfigError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/{operation}", self.base_url.trim_end_matches('/'))
    }

    async fn call(
        &self,
        operation: &'static str,
        account: &str,
        subaccount: &Subaccount,
    ) -> Result<Value> {
        let url = self.endpoint(operation);
        let body = json!({
            "account": account,
            "subaccount": subaccount,
        });

        logging::log(LogLevel::Info, &format!("POST {url}"));

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConverterError::RpcError(format!("{operation} request failed: {e}")))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            ConverterError::RpcError(format!("failed to read {operation} response: {e}"))
        })?;

        if !status.is_success() {
            return Err(ConverterError::RpcError(format!(
                "{operation} returned HTTP {}: {text}",
                status.as_u16()
            )));
        }

        serde_json::from_str(&text).map_err(|e| {
            ConverterError::RpcError(format!("undecodable {operation} response: {e}"))
        })
    }
}

#[async_trait]
impl LedgerService for HttpLedgerService {
    async fn get_account(&self, account: &str, subaccount: &Subaccount) -> Result<Value> {
        self.call("get_account", account, subaccount).await
    }

    async fn convert_account(&self, account: &str, subaccount: &Subaccount) -> Result<Value> {
        self.call("convert_account", account, subaccount).await
    }
}
