//! Fixed-point balance formatting.
//!
//! Ledger balances travel as raw integers scaled by a power of ten. The
//! display value is the raw integer divided by `10^decimals`; the division is
//! done with integer div/rem so large magnitudes render exactly.

/// Decimal places of the d8 fixed-point convention.
pub const D8_DECIMALS: u32 = 8;

/// Decimal places of the d12 fixed-point convention.
pub const D12_DECIMALS: u32 = 12;

/// Formats a raw fixed-point integer as a decimal string.
///
/// Trailing zeros in the fractional part are trimmed and a whole number
/// renders without a decimal point, so `850_000_000` at d8 yields `"8.5"`
/// and `0` yields `"0"`. `decimals` must be small enough that `10^decimals`
/// fits in a `u128`; the configuration layer enforces this.
pub fn format_balance(raw: u128, decimals: u32) -> String {
    let divisor = 10u128.pow(decimals);
    let whole = raw / divisor;
    let frac = raw % divisor;

    if frac == 0 {
        return whole.to_string();
    }

    let frac = format!("{frac:0width$}", width = decimals as usize);
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
