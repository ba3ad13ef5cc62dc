//! Configuration for the converter client.

use crate::common::error::{ConverterError, Result};
use crate::types::balance::D8_DECIMALS;

/// Validated configuration for [`RequestCoordinator`].
///
/// [`RequestCoordinator`]: crate::core::coordinator::RequestCoordinator
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Base URL of the ledger service.
    pub service_url: String,
    /// Transaction explorer URL prefix; the transaction id is appended.
    pub explorer_tx_url: String,
    /// Token symbol appended to formatted balances.
    pub token_symbol: String,
    /// Fixed-point decimal places of balances reported by the service.
    pub balance_decimals: u32,
}

impl ConverterConfig {
    /// Explorer template of the ledger's SNS dashboard.
    pub const DEFAULT_EXPLORER_TX_URL: &'static str =
        "https://dashboard.internetcomputer.org/sns/zxeu2-7aaaa-aaaaq-aaafa-cai/transaction/";

    /// Default token symbol.
    pub const DEFAULT_TOKEN_SYMBOL: &'static str = "SNEED";

    /// Largest supported decimals value; `10^decimals` must fit in a `u128`.
    pub const MAX_BALANCE_DECIMALS: u32 = 38;
}

/// Builder for [`ConverterConfig`].
#[derive(Debug, Default)]
pub struct ConverterConfigBuilder {
    service_url: Option<String>,
    explorer_tx_url: Option<String>,
    token_symbol: Option<String>,
    balance_decimals: Option<u32>,
}

impl ConverterConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ledger service base URL. Required.
    #[must_use]
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Overrides the transaction explorer URL prefix.
    #[must_use]
    pub fn with_explorer_url(mut self, url: impl Into<String>) -> Self {
        self.explorer_tx_url = Some(url.into());
        self
    }

    /// Overrides the token symbol shown next to balances.
    #[must_use]
    pub fn with_token_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.token_symbol = Some(symbol.into());
        self
    }

    /// Overrides the fixed-point decimals (default d8).
    #[must_use]
    pub fn with_balance_decimals(mut self, decimals: u32) -> Self {
        self.balance_decimals = Some(decimals);
        self
    }

    /// Validates the settings and produces a [`ConverterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::ConfigError`] when the service URL is
    /// missing or empty, or when the decimals exceed
    /// [`ConverterConfig::MAX_BALANCE_DECIMALS`].
    pub fn build(self) -> Result<ConverterConfig> {
        let service_url = self
            .service_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConverterError::ConfigError("service URL is required".to_string()))?;

        let balance_decimals = self.balance_decimals.unwrap_or(D8_DECIMALS);
        if balance_decimals > ConverterConfig::MAX_BALANCE_DECIMALS {
            return Err(ConverterError::ConfigError(format!(
                "balance decimals {balance_decimals} exceeds the maximum of {}",
                ConverterConfig::MAX_BALANCE_DECIMALS
            )));
        }

        Ok(ConverterConfig {
            service_url,
            explorer_tx_url: self
                .explorer_tx_url
                .unwrap_or_else(|| ConverterConfig::DEFAULT_EXPLORER_TX_URL.to_string()),
            token_symbol: self
                .token_symbol
                .unwrap_or_else(|| ConverterConfig::DEFAULT_TOKEN_SYMBOL.to_string()),
            balance_decimals,
        })
    }
}

/// Builds a configuration from environment variables.
///
/// `CONVERTER_SERVICE_URL` is required; `CONVERTER_EXPLORER_URL`,
/// `CONVERTER_TOKEN_SYMBOL` and `CONVERTER_BALANCE_DECIMALS` override their
/// defaults when present.
pub fn from_env() -> Result<ConverterConfig> {
    let mut builder = ConverterConfigBuilder::new().with_service_url(
        std::env::var("CONVERTER_SERVICE_URL").map_err(|_| {
            ConverterError::ConfigError("CONVERTER_SERVICE_URL is not set".to_string())
        })?,
    );

    if let Ok(url) = std::env::var("CONVERTER_EXPLORER_URL") {
        builder = builder.with_explorer_url(url);
    }
    if let Ok(symbol) = std::env::var("CONVERTER_TOKEN_SYMBOL") {
        builder = builder.with_token_symbol(symbol);
    }
    if let Ok(decimals) = std::env::var("CONVERTER_BALANCE_DECIMALS") {
        let decimals = decimals.parse().map_err(|_| {
            ConverterError::ConfigError(format!(
                "CONVERTER_BALANCE_DECIMALS is not a number: {decimals}"
            ))
        })?;
        builder = builder.with_balance_decimals(decimals);
    }

    builder.build()
}
