//! Conversions between atomic units and decimal XMR strings.
//!
//! The wallet speaks atomic units only (`1 XMR = 10^12`). These helpers
//! exist for callers that accept or display human-readable amounts.

use crate::error::CoreError;

/// Atomic units per XMR.
pub const ATOMIC_UNITS_PER_XMR: u64 = 1_000_000_000_000;

const DECIMALS: usize = 12;

/// Render atomic units as a decimal XMR string, trimming trailing zeros.
pub fn format_xmr(atomic: u64) -> String {
    let whole = atomic / ATOMIC_UNITS_PER_XMR;
    let frac = atomic % ATOMIC_UNITS_PER_XMR;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:0width$}", width = DECIMALS);
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Parse a decimal XMR string (`"1"`, `"0.5"`, `".25"`) into atomic units.
///
/// Rejects signs, exponents, more than 12 fractional digits, and values
/// that do not fit in `u64`.
pub fn parse_xmr(input: &str) -> Result<u64, CoreError> {
    let invalid = |reason: &str| CoreError::InvalidAmount {
        input: input.to_owned(),
        reason: reason.to_owned(),
    };

    let s = input.trim();
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("empty amount"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected decimal digits"));
    }
    if frac.len() > DECIMALS {
        return Err(invalid("more than 12 fractional digits"));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid("amount too large"))?
    };
    let frac: u64 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<width$}", width = DECIMALS)
            .parse()
            .map_err(|_| invalid("expected decimal digits"))?
    };

    whole
        .checked_mul(ATOMIC_UNITS_PER_XMR)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| invalid("amount too large"))
}
