//! Minimal recursive parser for the nested key/value share-file format.
//!
//! The input is a single brace-delimited object of comma-separated
//! `"key": value` members, where a value is a quoted string, a bare integer
//! literal, or another nested object. The format is fixed and trusted, so the
//! parser does no more validation than it needs: it strips all whitespace up
//! front (the format is not whitespace-sensitive), peels the outer braces, and
//! splits members by scanning for commas at brace depth zero. That is enough
//! to handle nesting without a tokenizer.
//!
//! Quoted strings get their quote characters removed wholesale; escape
//! sequences are not part of the format and are not supported.

use std::collections::HashMap;

use anyhow::{Result, bail};

/// A decoded value from the share file
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
    Map(HashMap<String, Value>),
}

impl Value {
    /// Returns the nested mapping, or `None` for scalar values
    #[must_use]
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(members) => Some(members),
            _ => None,
        }
    }
}

/// Parses one nested key/value object into its mapping
///
/// # Errors
/// Returns an error if the text is not brace-enclosed, braces are unbalanced,
/// or a member has no `:` separator
pub fn parse(raw: &str) -> Result<HashMap<String, Value>> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    parse_object(&compact)
}

fn parse_object(text: &str) -> Result<HashMap<String, Value>> {
    let Some(body) = text.strip_prefix('{').and_then(|t| t.strip_suffix('}')) else {
        bail!("object is not enclosed in braces: {text:?}");
    };

    let mut members = HashMap::new();
    if body.is_empty() {
        return Ok(members);
    }

    for member in split_members(body)? {
        let Some((raw_key, raw_value)) = member.split_once(':') else {
            bail!("member {member:?} has no ':' separator");
        };
        let key = raw_key.replace('"', "");
        members.insert(key, classify(raw_value)?);
    }

    Ok(members)
}

/// Splits an object body into its top-level members
///
/// Only commas at brace depth zero separate members, so nested objects pass
/// through intact.
fn split_members(body: &str) -> Result<Vec<&str>> {
    let mut members = Vec::new();
    let mut depth: u32 = 0;
    let mut start = 0;

    for (position, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    bail!("unbalanced braces in {body:?}");
                }
                depth -= 1;
            }
            ',' if depth == 0 => {
                members.push(&body[start..position]);
                start = position + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        bail!("unbalanced braces in {body:?}");
    }

    members.push(&body[start..]);
    Ok(members)
}

/// Classifies a raw member value: nested object, quoted text, or integer
/// literal (falling back to raw text when integer parsing fails)
fn classify(raw: &str) -> Result<Value> {
    if raw.starts_with('{') {
        return Ok(Value::Map(parse_object(raw)?));
    }
    if raw.starts_with('"') {
        return Ok(Value::Text(raw.replace('"', "")));
    }
    Ok(raw
        .parse::<i64>()
        .map(Value::Int)
        .unwrap_or_else(|_| Value::Text(raw.to_string())))
}
