use anyhow::{Context, Result};

use crate::codec::{self, DecodedInput};
use crate::domain::{SchemeParams, Share};
use crate::parser;
use crate::recon::{self, Reconstruction};

/// Everything a run produces: the declared parameters, the decoded shares,
/// and the reconstruction outcome
#[derive(Debug)]
pub struct Recovery {
    pub params: SchemeParams,
    pub shares: Vec<Share>,
    pub outcome: Reconstruction,
}

/// Runs the full pipeline over the raw share-file text: parse, decode,
/// reconstruct
///
/// # Errors
/// Returns an error if the text is malformed, a share fails to decode, or no
/// subset of shares produces an integral secret
pub fn recover(raw: &str) -> Result<Recovery> {
    let root = parser::parse(raw).context("failed to parse share file")?;
    let DecodedInput { params, shares } =
        codec::extract(&root).context("failed to decode shares")?;
    let outcome = recon::reconstruct(&shares, params.threshold())?;

    Ok(Recovery {
        params,
        shares,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_recover_canonical_example() {
        let raw = r#"
        {
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2",  "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "4",  "value": "213" }
        }
        "#;

        let recovery = recover(raw).unwrap();
        assert_eq!(recovery.outcome.secret, BigInt::from(3));
        assert_eq!(*recovery.params.share_count(), 4);
        assert_eq!(*recovery.params.threshold(), 3);
        assert_eq!(recovery.shares.len(), 4);
    }

    #[test]
    fn test_recover_malformed_text() {
        let result = recover(r#"{"keys": {"n": 2, "k": 2}"#);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("failed to parse share file")
        );
    }

    #[test]
    fn test_recover_undecodable_share() {
        let raw = r#"
        {
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "8", "value": "9" }
        }
        "#;
        let result = recover(raw);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("failed to decode shares")
        );
    }
}
