//! Item Models
//!
//! Data structures matching the backend's item records.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Opaque item identifier.
///
/// The backend may send ids as JSON numbers or strings; both are held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Num(u64),
            Str(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Num(n) => ItemId(n.to_string()),
            RawId::Str(s) => ItemId(s),
        })
    }
}

/// Found-item record (matches backend)
///
/// Only `id` and `description` are required. Other fields may be missing or
/// `null`; they decode to empty values instead of failing the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    /// Short display title
    pub description: String,
    /// Where the item was found
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Longer free-text detail
    #[serde(rename = "itemDescription", default)]
    pub item_description: Option<String>,
    /// Image reference, resolved against the uploads path
    #[serde(default)]
    pub image: Option<String>,
    /// `None` when absent or unreadable
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ai_suggestion: String,
}

impl ItemRecord {
    /// Detail text, if present and not blank
    pub fn detail(&self) -> Option<&str> {
        self.item_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Decode a listing record by record, skipping any that cannot be read so
/// one malformed entry never hides the rest
pub fn decode_listing(values: Vec<serde_json::Value>) -> Vec<ItemRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<ItemRecord>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("[MODELS] Skipping item #{}: {}", index, e);
                None
            }
        })
        .collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Epoch numbers above this are taken as milliseconds.
const MILLIS_THRESHOLD: u64 = 100_000_000_000;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Accepts RFC 3339 text, naive UTC text, or epoch seconds/milliseconds.
/// `null` and unrecognized text give `None`.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let parsed = match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => None,
        Some(RawTimestamp::Int(n)) => from_epoch(n),
        Some(RawTimestamp::Float(f)) => from_epoch(f as i64),
        Some(RawTimestamp::Text(s)) => parse_timestamp_text(&s),
    };
    Ok(parsed)
}

fn from_epoch(n: i64) -> Option<DateTime<Utc>> {
    if n.unsigned_abs() > MILLIS_THRESHOLD {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}

fn parse_timestamp_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
