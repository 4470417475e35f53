use anchor_lang::prelude::Pubkey;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path, str::FromStr};

use crate::error::{MerkleTreeError, Result};

/// Raw row of the holder list; only `address` and `amount` are read, other columns are ignored
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default, alias = "Address")]
    address: Option<String>,
    #[serde(default, alias = "Amount")]
    amount: Option<String>,
}

/// One validated entry of the holder list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvEntry {
    pub recipient: Pubkey,
    /// Amount in base units
    pub amount: u64,
}

impl CsvEntry {
    pub fn new_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let file = File::open(path)?;
        Self::new_from_reader(file)
    }

    /// Parse a headered CSV. Rows missing either field are rejected, not skipped.
    pub fn new_from_reader<R: Read>(reader: R) -> Result<Vec<Self>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut entries = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line());
            let row: CsvRow = record.deserialize(Some(&headers))?;
            entries.push(Self::from_row(row, line)?);
        }
        Ok(entries)
    }

    fn from_row(row: CsvRow, line: u64) -> Result<Self> {
        let address = required(row.address, line, "address")?;
        let amount = required(row.amount, line, "amount")?;

        let recipient = Pubkey::from_str(&address)
            .ok()
            .filter(|key| *key != Pubkey::default())
            .ok_or_else(|| MerkleTreeError::InvalidAddress {
                line,
                value: address.clone(),
            })?;

        let amount = amount
            .parse::<u64>()
            .ok()
            .filter(|amount| *amount > 0)
            .ok_or(MerkleTreeError::InvalidAmount {
                line,
                value: amount,
            })?;

        Ok(Self { recipient, amount })
    }
}

fn required(value: Option<String>, line: u64, field: &'static str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(MerkleTreeError::MissingField { line, field })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs";
    const B: &str = "8G9xE8awr9vA2PZWFTJSHNhS16KLnXYdV6XEaJP1a2Yx";

    #[test]
    fn test_parse_entries() {
        let data = format!("address,amount\n{A},100\n {B} , 200 \n");
        let entries = CsvEntry::new_from_reader(data.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].recipient, Pubkey::from_str(A).unwrap());
        assert_eq!(entries[0].amount, 100);
        assert_eq!(entries[1].amount, 200);
    }

    #[test]
    fn test_extra_columns_and_quotes() {
        let data = format!(
            "Rank,Address,Name Tag,Quantity,Amount\n1,\"{A}\",whale,42,1500\n"
        );
        let entries = CsvEntry::new_from_reader(data.as_bytes()).unwrap();
        assert_eq!(entries, vec![CsvEntry {
            recipient: Pubkey::from_str(A).unwrap(),
            amount: 1500,
        }]);
    }

    #[test]
    fn test_reject_missing_amount() {
        let data = format!("address,amount\n{A},100\n{B},\n");
        let err = CsvEntry::new_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MerkleTreeError::MissingField { line: 3, field: "amount" }
        ));
    }

    #[test]
    fn test_reject_short_row() {
        let data = format!("address,amount\n{A}\n");
        let err = CsvEntry::new_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, MerkleTreeError::MissingField { field: "amount", .. }));
    }

    #[test]
    fn test_reject_missing_address_column() {
        let data = "wallet,amount\nsomething,100\n";
        let err = CsvEntry::new_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, MerkleTreeError::MissingField { field: "address", .. }));
    }

    #[test]
    fn test_reject_bad_values() {
        let data = "address,amount\n0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d,100\n";
        assert!(matches!(
            CsvEntry::new_from_reader(data.as_bytes()),
            Err(MerkleTreeError::InvalidAddress { line: 2, .. })
        ));

        let data = format!("address,amount\n{A},1.5\n");
        assert!(matches!(
            CsvEntry::new_from_reader(data.as_bytes()),
            Err(MerkleTreeError::InvalidAmount { line: 2, .. })
        ));

        let data = format!("address,amount\n{A},0\n");
        assert!(matches!(
            CsvEntry::new_from_reader(data.as_bytes()),
            Err(MerkleTreeError::InvalidAmount { .. })
        ));
    }
}
