//! Duration grammar shared by the write surface and the operator tooling.
//!
//! A duration expression is a sequence of decimal magnitude+unit pairs with
//! an optional leading sign, e.g. `"2h"`, `"90m"`, `"1h30m"`, `"1.5h"`. The
//! accepted units are `s`, `m`, and `h`; nothing larger than hours exists in
//! the grammar. The bare string `"0"` is a valid zero duration.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} out of range")]
    OutOfRange(String),
    #[error("duration {0:?} must not be negative")]
    Negative(String),
}

fn unit_scale(unit: &str) -> Option<u128> {
    match unit {
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parse a duration expression.
///
/// The sign grammar is accepted for compatibility, but a negative total is
/// rejected: the stored representation is unsigned. `"-0"` parses to zero.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let mut total: u128 = 0;
    while !s.is_empty() {
        let int_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (int_digits, rest) = s.split_at(int_len);
        s = rest;

        let mut frac_digits = "";
        if let Some(rest) = s.strip_prefix('.') {
            let frac_len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            let (digits, tail) = rest.split_at(frac_len);
            frac_digits = digits;
            s = tail;
        }

        // each pair needs a magnitude, integral or fractional
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationError::Invalid(input.to_string()));
        }

        let unit_len = s
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(s.len());
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_scale(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits
                .parse()
                .map_err(|_| DurationError::OutOfRange(input.to_string()))?
        };
        total = whole
            .checked_mul(scale)
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or_else(|| DurationError::OutOfRange(input.to_string()))?;

        // fractional digits scale down from the unit, no float involved
        let mut frac_scale = scale;
        for digit in frac_digits.bytes() {
            frac_scale /= 10;
            total = total
                .checked_add(u128::from(digit - b'0') * frac_scale)
                .ok_or_else(|| DurationError::OutOfRange(input.to_string()))?;
        }
    }

    if negative {
        if total > 0 {
            return Err(DurationError::Negative(input.to_string()));
        }
        return Ok(Duration::ZERO);
    }

    let secs = u64::try_from(total / NANOS_PER_SEC)
        .map_err(|_| DurationError::OutOfRange(input.to_string()))?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

/// Render a duration in the same grammar [`parse_duration`] accepts, e.g.
/// `"1h30m0s"`. Used for operator-facing display; `format_duration` and
/// `parse_duration` round-trip exactly.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let nanos = duration.subsec_nanos();

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 || !out.is_empty() {
        out.push_str(&format!("{minutes}m"));
    }
    if nanos == 0 {
        out.push_str(&format!("{secs}s"));
    } else {
        let frac = format!("{nanos:09}");
        let frac = frac.trim_end_matches('0');
        out.push_str(&format!("{secs}.{frac}s"));
    }
    out
}
