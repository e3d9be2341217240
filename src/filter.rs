//! Pool signature detection on the coinbase input.

use crate::error::CheckError;
use crate::fetch::DecodedTransaction;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

pub const SLUSH_POOL_TAG: &str = "/slush/";

static SLUSH_POOL: Lazy<PoolSignature> = Lazy::new(PoolSignature::slush);

/// A literal tag a pool writes into its coinbase data.
#[derive(Debug, Clone)]
pub struct PoolSignature {
    tag: String,
    regex: Regex,
}

impl PoolSignature {
    /// An empty tag would match every coinbase, so it is rejected.
    pub fn new(tag: &str) -> anyhow::Result<Self> {
        if tag.is_empty() {
            return Err(CheckError::EmptyPoolTag.into());
        }
        Ok(Self {
            tag: tag.into(),
            regex: Regex::new(&regex::escape(tag))?,
        })
    }

    pub fn slush() -> Self {
        Self::new(SLUSH_POOL_TAG).unwrap()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn matches_text(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Decodes `coinbase_hex` and looks for the tag in its lossy UTF-8 text.
    ///
    /// Never fails: undecodable hex is reported and counts as no match.
    pub fn matches_hex(&self, coinbase_hex: &str) -> bool {
        let Ok(raw) = hex::decode(coinbase_hex) else {
            warn!("invalid cb string");
            return false;
        };
        let text = String::from_utf8_lossy(&raw);
        debug!("Coinbase text: {:?}", text);
        self.matches_text(&text)
    }
}

pub fn is_slushpool_block(coinbase_hex: &str) -> bool {
    SLUSH_POOL.matches_hex(coinbase_hex)
}

/// Runs `predicate` on the coinbase hex of the first input of `tx`.
///
/// Later inputs are never looked at. An input-less transaction is an error;
/// a first input without a `coinbase` field is reported and counts as no
/// match.
pub fn coinbase_filter(
    tx: &DecodedTransaction,
    predicate: impl Fn(&str) -> bool,
) -> Result<bool, CheckError> {
    let Some(input) = tx.vin.first() else {
        return Err(CheckError::NoCoinbaseInput);
    };
    match &input.coinbase {
        Some(coinbase_hex) => {
            debug!("Coinbase hex: {coinbase_hex}");
            Ok(predicate(coinbase_hex))
        }
        None => {
            warn!("invalid cb string");
            Ok(false)
        }
    }
}
