//! Client SDK for a token conversion dapp backed by a remote ledger indexer.
//!
//! The crate drives two user-triggered workflows against a single remote
//! service: querying an account's balance and converting that account into a
//! canonical-format balance transfer. Both take the account identifier
//! verbatim plus a textual subaccount descriptor, validate the descriptor
//! into a fixed 32-byte vector, issue one remote call, and classify the
//! response for presentation.
//!
//! ```no_run
//! use ledger_converter::{ConverterConfigBuilder, RequestCoordinator};
//!
//! # async fn run() -> ledger_converter::Result<()> {
//! let config = ConverterConfigBuilder::new()
//!     .with_service_url("https://converter.example.org")
//!     .build()?;
//! let coordinator = RequestCoordinator::with_http(config)?;
//!
//! let balance = coordinator.query_balance("my-account", "1,2,3").await?;
//! if coordinator.conversion_enabled() {
//!     let outcome = coordinator.convert("my-account", "1,2,3").await?;
//!     println!("{}", outcome.message());
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod config;
pub mod core;
pub mod remote;
pub mod types;

pub use common::error::{ConverterError, Result};
pub use config::{ConverterConfig, ConverterConfigBuilder};
pub use core::coordinator::RequestCoordinator;
pub use core::view::ViewState;
pub use remote::{HttpLedgerService, LedgerService};
pub use types::balance::{D8_DECIMALS, D12_DECIMALS, format_balance};
pub use types::outcome::{
    AccountSummary, BalanceOutcome, COOLDOWN_MESSAGE, ConvertOutcome, LedgerReject,
    ResponseEnvelope, STALE_INDEXER_MESSAGE,
};
pub use types::subaccount::{DEFAULT_SUBACCOUNT, SUBACCOUNT_LEN, Subaccount, parse_subaccount};
