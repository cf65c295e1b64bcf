use crate::app::Record;
use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// The members endpoint serves ids as digit strings; accept both forms.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

pub fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid record id {s:?}"))),
    }
}

/// Parses the endpoint body into records, keeping the first of any
/// duplicated ids.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> =
        serde_json::from_str(json).map_err(|e| eyre!("Malformed record list: {e}"))?;
    Ok(dedup_by_id(records))
}

fn dedup_by_id(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| {
            let first = seen.insert(r.id);
            if !first {
                tracing::warn!(id = r.id, "dropping record with duplicate id");
            }
            first
        })
        .collect()
}
