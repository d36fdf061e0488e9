//! Share extraction and base-N decoding
//!
//! Turns the parsed share-file mapping into [`SchemeParams`] plus a decoded
//! share list. The entry keyed `"keys"` holds the integer fields `n` and `k`;
//! every other top-level key is a decimal x-coordinate whose value is a
//! nested mapping with text fields `base` (2-36) and `value` (a digit string
//! in that base, letters standing in for digits >= 10).
//!
//! A single malformed share is fatal for the whole run: silently skipping it
//! would change the declared n out from under the voting step.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::domain::{SchemeParams, Share, ShareCount, Threshold};
use crate::parser::Value;

/// Top-level key holding the scheme parameters
pub const PARAMS_KEY: &str = "keys";

/// Smallest supported numeric base
pub const MIN_BASE: u32 = 2;

/// Largest supported numeric base (digits 0-9 plus a-z)
pub const MAX_BASE: u32 = 36;

/// The fully decoded input: scheme parameters plus one share per entry
#[derive(Debug)]
pub struct DecodedInput {
    pub params: SchemeParams,
    pub shares: Vec<Share>,
}

/// Extracts scheme parameters and shares from the parsed root mapping
///
/// Shares are sorted by x-coordinate so downstream diagnostics and subset
/// enumeration are deterministic regardless of mapping iteration order.
///
/// # Errors
/// Returns an error if the `"keys"` entry or its `n`/`k` fields are missing
/// or mistyped, if any share entry is malformed, if a digit string is invalid
/// for its declared base, or if two shares decode to the same x-coordinate
pub fn extract(root: &HashMap<String, Value>) -> Result<DecodedInput> {
    let params_fields = root
        .get(PARAMS_KEY)
        .with_context(|| format!("missing {PARAMS_KEY:?} entry with scheme parameters"))?
        .as_map()
        .with_context(|| format!("{PARAMS_KEY:?} entry is not a nested object"))?;

    let n = int_field(params_fields, "n")?;
    let k = int_field(params_fields, "k")?;

    let share_count = ShareCount::new(n)?;
    let threshold = usize::try_from(k)
        .ok()
        .and_then(|k| Threshold::new(k).ok())
        .with_context(|| format!("threshold k must be a positive integer (got {k})"))?;

    let mut shares = Vec::new();
    for (key, entry) in root {
        if key == PARAMS_KEY {
            continue;
        }
        shares.push(
            share_from_entry(key, entry)
                .with_context(|| format!("failed to decode share {key:?}"))?,
        );
    }
    shares.sort_by(|a, b| a.x().cmp(b.x()));

    for pair in shares.windows(2) {
        if pair[0].x() == pair[1].x() {
            bail!("two shares have the same x-coordinate {}", pair[0].x());
        }
    }

    Ok(DecodedInput {
        params: SchemeParams::new(share_count, threshold),
        shares,
    })
}

/// Decodes one share entry: the key is the x-coordinate, the nested object
/// carries the base and the digit string for y
fn share_from_entry(key: &str, entry: &Value) -> Result<Share> {
    let x: i64 = key
        .parse()
        .with_context(|| format!("share key {key:?} is not a decimal integer"))?;

    let fields = entry
        .as_map()
        .context("share entry is not a nested object")?;

    let base: u32 = text_field(fields, "base")?
        .parse()
        .context("field \"base\" is not a decimal integer")?;
    let digits = text_field(fields, "value")?;

    let y = decode_digits(digits, base)?;
    Ok(Share::new(BigInt::from(x), y))
}

/// Decodes a digit string in the given base into an unbounded integer
///
/// Digit symbols are `0-9` and case-insensitive `a-z`/`A-Z` for values
/// 10 through 35.
///
/// # Errors
/// Returns an error if the base is outside 2-36, the digit string is empty,
/// or any character is not a valid digit in the base
pub fn decode_digits(digits: &str, base: u32) -> Result<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        bail!("base {base} is out of range ({MIN_BASE}-{MAX_BASE})");
    }
    if digits.is_empty() {
        bail!("empty digit string");
    }

    let radix = BigInt::from(base);
    let mut value = BigInt::zero();
    for c in digits.chars() {
        let digit = c
            .to_digit(base)
            .with_context(|| format!("digit {c:?} is not valid in base {base}"))?;
        value = value * &radix + BigInt::from(digit);
    }
    Ok(value)
}

fn int_field(fields: &HashMap<String, Value>, name: &str) -> Result<i64> {
    match fields.get(name) {
        Some(Value::Int(value)) => Ok(*value),
        Some(_) => bail!("field {name:?} is not an integer"),
        None => bail!("missing integer field {name:?}"),
    }
}

fn text_field<'a>(fields: &'a HashMap<String, Value>, name: &str) -> Result<&'a str> {
    match fields.get(name) {
        Some(Value::Text(text)) => Ok(text),
        Some(_) => bail!("field {name:?} is not a text value"),
        None => bail!("missing text field {name:?}"),
    }
}
