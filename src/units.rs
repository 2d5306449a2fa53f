//! Conversions between the chain's smallest unit (wei) and decimal display units.

use thiserror::Error;

/// Decimals of the native currency (1 ether = 10^18 wei).
pub const ETHER_DECIMALS: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': expected a decimal number")]
    InvalidDigit { input: String },

    #[error("amount '{input}' has more than {decimals} fractional digits")]
    TooManyDecimals { input: String, decimals: u32 },

    #[error("amount '{input}' does not fit in 128 bits")]
    Overflow { input: String },
}

/// Formats `value` (in smallest units) as a decimal string.
///
/// Trailing fractional zeros are trimmed; whole amounts keep a single `.0`
/// so they still read as a decimal (`1000000000000000000` → `"1.0"`).
pub fn format_units(value: u128, decimals: u32) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let base = 10u128.pow(decimals);
    let whole = value / base;
    let fraction = value % base;
    if fraction == 0 {
        return format!("{whole}.0");
    }
    let digits = format!("{fraction:0width$}", width = decimals as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Parses a decimal string into smallest units.
pub fn parse_units(input: &str, decimals: u32) -> Result<u128, UnitsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
    {
        return Err(UnitsError::InvalidDigit {
            input: trimmed.to_string(),
        });
    }
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals {
            input: trimmed.to_string(),
            decimals,
        });
    }

    let overflow = || UnitsError::Overflow {
        input: trimmed.to_string(),
    };
    let mut value: u128 = 0;
    let padded = format!("{whole}{fraction:0<width$}", width = decimals as usize);
    for b in padded.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(b - b'0')))
            .ok_or_else(overflow)?;
    }
    Ok(value)
}

pub fn format_ether(wei: u128) -> String {
    format_units(wei, ETHER_DECIMALS)
}

pub fn parse_ether(input: &str) -> Result<u128, UnitsError> {
    parse_units(input, ETHER_DECIMALS)
}
