//! Error types for the converter client.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConverterError>;

/// All failure modes surfaced by the converter client.
///
/// Subaccount variants are input errors: they are raised before any remote
/// call is issued and must abort the current request. `RpcError` covers
/// transport-level failures (connection, HTTP status, undecodable body);
/// rejections the ledger service itself reports travel inside the response
/// envelope and are classified by the workflows, not here.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Invalid configuration (missing or malformed settings).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A subaccount token parsed to a value outside [0, 255].
    #[error("Subaccount value out of range: {0}. Values must be between 0 and 255.")]
    SubaccountValueOutOfRange(i128),

    /// More than 32 valid subaccount values were supplied.
    #[error(
        "Subaccount values out of range: A maximum of 32 values between 0 and 255 is allowed as a comma separated list."
    )]
    SubaccountTooLong,

    /// Transport-level failure talking to the ledger service.
    #[error("RPC error: {0}")]
    RpcError(String),

    /// The named workflow already has a request in flight.
    #[error("A {0} request is already in flight")]
    RequestInFlight(&'static str),

    /// Conversion was attempted before a balance query observed a positive
    /// balance for the account.
    #[error("Conversion is not enabled: query a positive balance first")]
    ConversionNotEnabled,
}
