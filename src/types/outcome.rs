//! Response envelopes from the ledger service and their classification.
//!
//! The service answers every operation with an externally tagged envelope,
//! `{"Ok": ...}` or `{"Err": ...}`. Rejections form a small closed variant
//! set; anything unrecognized is carried opaquely so it can be rendered back
//! to the user without loss.

use serde::Deserialize;
use serde_json::Value;

/// Fixed message shown when the service reports a conversion cooldown.
pub const COOLDOWN_MESSAGE: &str = "This function is on cooldown, please return in an hour.";

/// Fixed message shown when the service's transaction indexer is behind.
pub const STALE_INDEXER_MESSAGE: &str =
    "The transaction indexer is not up to date. Please try again in a while.";

/// Tagged result envelope the ledger service wraps every response in.
#[derive(Debug, Clone, Deserialize)]
pub enum ResponseEnvelope<T> {
    Ok(T),
    Err(LedgerReject),
}

/// A rejection reported inside a response envelope.
///
/// `OnCooldown` and `StaleIndexer` are the variants this client gives
/// dedicated handling; every other shape lands in `Other` with its raw
/// payload intact. Discrimination is by tag: a recognized tag with a payload
/// that does not decode falls through to `Other` rather than failing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum LedgerReject {
    /// The operation is rate limited.
    OnCooldown {},
    /// The service's backing index has not caught up to the ledger.
    StaleIndexer {},
    /// Any other rejection, kept verbatim for diagnostics.
    #[serde(untagged)]
    Other(Value),
}

/// The fields of a `get_account` response this client consumes.
///
/// The service returns more; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSummary {
    /// Total balance in d8 base units.
    pub new_total_balance_d8: u128,
}

/// Outcome of a balance query, as surfaced to the display layer.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceOutcome {
    /// The service returned an account summary.
    Balance {
        /// Balance in base units.
        raw: u128,
        /// Formatted balance with the token symbol, e.g. `"8.5 SNEED"`.
        display: String,
    },
    /// Any rejection or unrecognizable response, rendered as JSON text.
    Failed { rendering: String },
}

/// Outcome of a conversion request, as surfaced to the display layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertOutcome {
    /// The conversion settled in a ledger transaction.
    Converted {
        tx_id: String,
        /// Link into the configured transaction explorer.
        explorer_url: String,
    },
    /// Rate limited; try again later.
    OnCooldown,
    /// The transaction indexer is behind; try again later.
    StaleIndexer,
    /// Unrecognized rejection or response, rendered as JSON text.
    Unknown { rendering: String },
}

impl ConvertOutcome {
    /// Human-readable message for this outcome.
    ///
    /// Known rejections map to fixed guidance and never expose the raw
    /// structure; unknown ones render losslessly for diagnostics.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ConvertOutcome::Converted {
                tx_id,
                explorer_url,
            } => format!("Converted in transaction: {tx_id} ({explorer_url})"),
            ConvertOutcome::OnCooldown => COOLDOWN_MESSAGE.to_string(),
            ConvertOutcome::StaleIndexer => STALE_INDEXER_MESSAGE.to_string(),
            ConvertOutcome::Unknown { rendering } => rendering.clone(),
        }
    }
}

/// Extracts the account summary from a `get_account` envelope.
///
/// Returns `None` for rejections and unrecognizable bodies alike; the balance
/// workflow renders the whole envelope generically in both cases.
#[must_use]
pub fn account_summary(envelope: &Value) -> Option<AccountSummary> {
    match serde_json::from_value::<ResponseEnvelope<AccountSummary>>(envelope.clone()) {
        Ok(ResponseEnvelope::Ok(summary)) => Some(summary),
        Ok(ResponseEnvelope::Err(_)) | Err(_) => None,
    }
}

/// Classifies a `convert_account` envelope.
///
/// `explorer_base` is the transaction explorer URL prefix the transaction id
/// is appended to on success.
#[must_use]
pub fn classify_conversion(envelope: &Value, explorer_base: &str) -> ConvertOutcome {
    match serde_json::from_value::<ResponseEnvelope<String>>(envelope.clone()) {
        Ok(ResponseEnvelope::Ok(tx_id)) => {
            let explorer_url = format!("{explorer_base}{tx_id}");
            ConvertOutcome::Converted {
                tx_id,
                explorer_url,
            }
        }
        Ok(ResponseEnvelope::Err(reject)) => match reject {
            LedgerReject::OnCooldown {} => ConvertOutcome::OnCooldown,
            LedgerReject::StaleIndexer {} => ConvertOutcome::StaleIndexer,
            LedgerReject::Other(_) => ConvertOutcome::Unknown {
                rendering: envelope.to_string(),
            },
        },
        Err(_) => ConvertOutcome::Unknown {
            rendering: envelope.to_string(),
        },
    }
}
