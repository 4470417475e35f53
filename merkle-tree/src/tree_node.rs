use anchor_lang::prelude::Pubkey;
use merkle_airdrop::merkle::hash_leaf;
use serde::{Deserialize, Serialize};

use crate::csv_entry::CsvEntry;

/// A committed (recipient, amount) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Pubkey of the recipient; will be responsible for signing the claim
    #[serde(with = "pubkey_string")]
    pub recipient: Pubkey,
    /// Amount in base units of the distributed mint
    pub amount: u64,
}

impl TreeNode {
    pub fn new(recipient: Pubkey, amount: u64) -> Self {
        Self { recipient, amount }
    }

    /// Leaf digest, identical to what the program recomputes at claim time
    pub fn hash(&self) -> [u8; 32] {
        hash_leaf(&self.recipient, self.amount)
    }
}

impl From<CsvEntry> for TreeNode {
    fn from(entry: CsvEntry) -> Self {
        Self::new(entry.recipient, entry.amount)
    }
}

/// Base58 (de)serialization for pubkeys in the JSON artifact
mod pubkey_string {
    use anchor_lang::prelude::Pubkey;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(pubkey)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let value = String::deserialize(deserializer)?;
        Pubkey::from_str(&value).map_err(de::Error::custom)
    }
}
