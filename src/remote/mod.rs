//! Transports for reaching the remote ledger service.
//!
//! The service is an opaque RPC endpoint; the trait below is the only seam
//! the workflows see, so tests can substitute a scripted implementation.

pub mod http;

pub use http::HttpLedgerService;

use async_trait::async_trait;
use serde_json::Value;

use crate::common::error::Result;
use crate::types::subaccount::Subaccount;

/// The two operations the remote ledger service exposes.
///
/// Both return the raw response envelope; classification is the caller's job.
/// An `Err` from these methods is a transport failure, never a rejection the
/// service itself reported.
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Fetches the account summary for `account` under `subaccount`.
    async fn get_account(&self, account: &str, subaccount: &Subaccount) -> Result<Value>;

    /// Requests conversion of the balance held by `account` under
    /// `subaccount`.
    async fn convert_account(&self, account: &str, subaccount: &Subaccount) -> Result<Value>;
}
