//! The two user-triggered workflows against the ledger service.
//!
//! Each workflow is a short state machine: collect inputs, validate the
//! subaccount, issue one remote call, classify the resolved envelope, update
//! the view. Validation failures abort before any network traffic.

use std::sync::Mutex;

use crate::common::error::{ConverterError, Result};
use crate::common::logging::{self, LogLevel};
use crate::config::ConverterConfig;
use crate::core::view::ViewState;
use crate::remote::{HttpLedgerService, LedgerService};
use crate::types::balance::format_balance;
use crate::types::outcome::{BalanceOutcome, ConvertOutcome, account_summary, classify_conversion};
use crate::types::subaccount::parse_subaccount;

/// Drives the balance-query and conversion workflows.
///
/// Re-entrant submission of a workflow while its remote call is pending is
/// rejected with [`ConverterError::RequestInFlight`]; the conversion workflow
/// is additionally gated behind a prior balance query that observed a
/// strictly positive balance.
pub struct RequestCoordinator<S> {
    service: S,
    config: ConverterConfig,
    view: Mutex<ViewState>,
    balance_flight: tokio::sync::Mutex<()>,
    convert_flight: tokio::sync::Mutex<()>,
}

impl RequestCoordinator<HttpLedgerService> {
    /// Creates a coordinator talking HTTP to the configured service URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::ConfigError`] when the transport cannot be
    /// constructed from the configuration.
    pub fn with_http(config: ConverterConfig) -> Result<Self> {
        let service = HttpLedgerService::new(config.service_url.clone())?;
        Ok(Self::new(config, service))
    }
}

impl<S: LedgerService> RequestCoordinator<S> {
    /// Creates a coordinator over an arbitrary [`LedgerService`].
    pub fn new(config: ConverterConfig, service: S) -> Self {
        Self {
            service,
            config,
            view: Mutex::new(ViewState::default()),
            balance_flight: tokio::sync::Mutex::new(()),
            convert_flight: tokio::sync::Mutex::new(()),
        }
    }

    /// Snapshot of the current view state.
    pub fn view(&self) -> ViewState {
        self.with_view(|view| view.clone())
    }

    /// Whether the conversion trigger is currently enabled.
    pub fn conversion_enabled(&self) -> bool {
        self.with_view(|view| view.convert_enabled)
    }

    /// Queries the balance of `account` under the given subaccount
    /// descriptor.
    ///
    /// A strictly positive balance enables the conversion trigger; a zero
    /// balance leaves it untouched. Rejections and unrecognizable responses
    /// are rendered generically into the balance region without variant
    /// mapping.
    ///
    /// # Errors
    ///
    /// Input errors only: a malformed subaccount descriptor, or a balance
    /// query already in flight. Remote failures resolve to
    /// [`BalanceOutcome::Failed`], not to an `Err`.
    pub async fn query_balance(
        &self,
        account: &str,
        subaccount_text: &str,
    ) -> Result<BalanceOutcome> {
        let _in_flight = self
            .balance_flight
            .try_lock()
            .map_err(|_| ConverterError::RequestInFlight("balance query"))?;

        let subaccount = parse_subaccount(subaccount_text)?;

        self.with_view(|view| view.balance_busy = true);
        logging::log(
            LogLevel::Info,
            &format!("Querying balance for account {account}"),
        );

        let outcome = match self.service.get_account(account, &subaccount).await {
            Ok(envelope) => match account_summary(&envelope) {
                Some(summary) => {
                    let raw = summary.new_total_balance_d8;
                    if raw > 0 {
                        self.with_view(|view| view.convert_enabled = true);
                    }
                    let display = format!(
                        "{} {}",
                        format_balance(raw, self.config.balance_decimals),
                        self.config.token_symbol
                    );
                    logging::log(LogLevel::Success, &format!("Balance: {display}"));
                    BalanceOutcome::Balance { raw, display }
                }
                None => {
                    let rendering = envelope.to_string();
                    logging::log(
                        LogLevel::Warning,
                        &format!("Balance query rejected: {rendering}"),
                    );
                    BalanceOutcome::Failed { rendering }
                }
            },
            Err(err) => {
                logging::log(LogLevel::Error, &format!("Balance query failed: {err}"));
                BalanceOutcome::Failed {
                    rendering: err.to_string(),
                }
            }
        };

        self.with_view(|view| {
            view.balance_region = Some(match &outcome {
                BalanceOutcome::Balance { display, .. } => display.clone(),
                BalanceOutcome::Failed { rendering } => rendering.clone(),
            });
            view.balance_busy = false;
        });

        Ok(outcome)
    }

    /// Converts the balance of `account` under the given subaccount
    /// descriptor.
    ///
    /// The trigger is disabled as soon as the request is submitted and stays
    /// disabled afterwards; re-enabling requires another positive balance
    /// query.
    ///
    /// # Errors
    ///
    /// Input errors only: conversion not enabled, a malformed subaccount
    /// descriptor, or a conversion already in flight. Remote failures resolve
    /// to one of the [`ConvertOutcome`] failure variants, not to an `Err`.
    pub async fn convert(&self, account: &str, subaccount_text: &str) -> Result<ConvertOutcome> {
        let _in_flight = self
            .convert_flight
            .try_lock()
            .map_err(|_| ConverterError::RequestInFlight("conversion"))?;

        if !self.conversion_enabled() {
            return Err(ConverterError::ConversionNotEnabled);
        }

        let subaccount = parse_subaccount(subaccount_text)?;

        self.with_view(|view| {
            view.convert_enabled = false;
            view.convert_busy = true;
        });
        logging::log(
            LogLevel::Info,
            &format!("Requesting conversion for account {account}"),
        );

        let outcome = match self.service.convert_account(account, &subaccount).await {
            Ok(envelope) => classify_conversion(&envelope, &self.config.explorer_tx_url),
            Err(err) => ConvertOutcome::Unknown {
                rendering: err.to_string(),
            },
        };

        match &outcome {
            ConvertOutcome::Converted { tx_id, .. } => {
                logging::log(LogLevel::Success, &format!("Converted in transaction {tx_id}"));
            }
            ConvertOutcome::OnCooldown | ConvertOutcome::StaleIndexer => {
                logging::log(LogLevel::Warning, &outcome.message());
            }
            ConvertOutcome::Unknown { rendering } => {
                logging::log(LogLevel::Error, &format!("Conversion failed: {rendering}"));
            }
        }

        self.with_view(|view| {
            view.result_region = Some(outcome.message());
            view.convert_busy = false;
        });

        Ok(outcome)
    }

    fn with_view<T>(&self, f: impl FnOnce(&mut ViewState) -> T) -> T {
        let mut view = match self.view.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut view)
    }
}
