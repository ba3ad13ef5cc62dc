//! Subaccount descriptor parsing.
//!
//! A subaccount is a 32-byte suffix that disambiguates multiple balances held
//! under one account identifier. Users supply it as a comma-separated list of
//! byte values ("1,2,3"); this module turns that text into the fixed-width
//! byte vector the ledger service expects.

use crate::common::error::{ConverterError, Result};

/// A 32-byte subaccount identifier extension.
pub type Subaccount = [u8; 32];

/// Number of bytes in a subaccount.
pub const SUBACCOUNT_LEN: usize = 32;

/// The all-zero subaccount, used when no descriptor is supplied.
pub const DEFAULT_SUBACCOUNT: Subaccount = [0; SUBACCOUNT_LEN];

/// Parses a textual subaccount descriptor into a [`Subaccount`].
///
/// The descriptor is a comma-separated list of at most 32 integers in
/// [0, 255], filled into the vector in encounter order with the unused tail
/// left zero. An empty descriptor yields [`DEFAULT_SUBACCOUNT`].
///
/// Token handling is deliberately lenient and is a compatibility contract;
/// callers depend on each of these rules:
///
/// * tokens are trimmed, and tokens empty after trimming are skipped, so
///   consecutive or trailing commas produce no element;
/// * each token is read with a leading-numeric-prefix parse ("12abc" reads
///   as 12), and tokens with no leading digits are skipped;
/// * tokens parsing to 0 are skipped as well, so a literal 0 never occupies
///   a slot;
/// * a value outside [0, 255] aborts parsing with
///   [`ConverterError::SubaccountValueOutOfRange`];
/// * more than 32 accepted values abort parsing with
///   [`ConverterError::SubaccountTooLong`].
pub fn parse_subaccount(raw: &str) -> Result<Subaccount> {
    let mut bytes = DEFAULT_SUBACCOUNT;

    if raw.is_empty() {
        return Ok(bytes);
    }

    // A lone value is handled as a one-element list.
    let mut text = raw.to_string();
    if !text.contains(',') {
        text.push(',');
    }

    let mut count = 0;
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let Some(value) = leading_int(token) else {
            continue;
        };
        if value == 0 {
            continue;
        }
        if !(0..=255).contains(&value) {
            return Err(ConverterError::SubaccountValueOutOfRange(value));
        }
        if count >= SUBACCOUNT_LEN {
            return Err(ConverterError::SubaccountTooLong);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            bytes[count] = value as u8;
        }
        count += 1;
    }

    Ok(bytes)
}

/// Reads an optionally signed decimal integer from the start of `token`.
///
/// Returns `None` when no leading digits are present. Digits beyond the
/// leading run are ignored. The value saturates instead of overflowing, which
/// only matters for tokens hundreds of digits long; anything that large is far
/// outside [0, 255] either way.
fn leading_int(token: &str) -> Option<i128> {
    let bytes = token.as_bytes();
    let mut idx = 0;
    let mut negative = false;

    match bytes.first() {
        Some(b'+') => idx = 1,
        Some(b'-') => {
            negative = true;
            idx = 1;
        }
        _ => {}
    }

    let mut value: i128 = 0;
    let mut any_digits = false;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        any_digits = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i128::from(bytes[idx] - b'0'));
        idx += 1;
    }

    if !any_digits {
        return None;
    }
    Some(if negative { -value } else { value })
}
