//! Versioned JSON envelope for persisted collections
//!
//! Collections are written as `{"schema_version":1,"records":[...]}`. A bare
//! JSON array is read as schema version 0. Anything unreadable decodes to an
//! empty collection and a warning; reads never fail.

use crate::errors::{serialization_error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope version written by this build
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeOut<'a, T> {
    schema_version: u32,
    records: &'a [T],
}

#[derive(Deserialize)]
struct EnvelopeIn {
    schema_version: u32,
    records: Value,
}

/// How a stored value was interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStatus {
    /// No value under the key
    Missing,
    /// Unversioned bare array
    Legacy,
    /// Envelope at `SCHEMA_VERSION`
    Current,
    /// Value could not be used; holds the reason
    Rejected(String),
}

/// A decoded collection together with how it was read
#[derive(Debug)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub status: DecodeStatus,
}

/// Encode `records` in the current envelope
///
/// # Errors
///
/// Fails when a record cannot be serialized.
pub fn encode_collection<T: Serialize>(key: &str, records: &[T]) -> Result<String> {
    serde_json::to_string(&EnvelopeOut {
        schema_version: SCHEMA_VERSION,
        records,
    })
    .map_err(|e| serialization_error(key, e))
}

/// Decode the value stored under `key`
pub fn decode_collection<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Decoded<T> {
    let Some(raw) = raw else {
        return Decoded {
            records: Vec::new(),
            status: DecodeStatus::Missing,
        };
    };

    match interpret(raw) {
        Ok((records, status)) => Decoded { records, status },
        Err(reason) => {
            tracing::warn!(
                store_key = key,
                reason = %reason,
                "discarding unreadable collection"
            );
            Decoded {
                records: Vec::new(),
                status: DecodeStatus::Rejected(reason),
            }
        }
    }
}

type Interpreted<T> = std::result::Result<(Vec<T>, DecodeStatus), String>;

fn interpret<T: DeserializeOwned>(raw: &str) -> Interpreted<T> {
    let value: Value = serde_json::from_str(raw).map_err(|e| format!("malformed JSON: {}", e))?;

    if value.is_array() {
        let records = serde_json::from_value(value).map_err(|e| format!("bad record: {}", e))?;
        return Ok((records, DecodeStatus::Legacy));
    }

    let envelope: EnvelopeIn =
        serde_json::from_value(value).map_err(|e| format!("not a collection envelope: {}", e))?;

    if envelope.schema_version != SCHEMA_VERSION {
        return Err(format!(
            "unsupported schema_version {}",
            envelope.schema_version
        ));
    }

    let records =
        serde_json::from_value(envelope.records).map_err(|e| format!("bad record: {}", e))?;
    Ok((records, DecodeStatus::Current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        name: String,
    }

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_encode_writes_envelope() {
        let json = encode_collection("clubs", &[item("Alpha")]).unwrap();
        assert_eq!(json, r#"{"schema_version":1,"records":[{"name":"Alpha"}]}"#);
    }

    #[test]
    fn test_decode_current_envelope() {
        let decoded: Decoded<Item> = decode_collection(
            "clubs",
            Some(r#"{"schema_version":1,"records":[{"name":"Alpha"}]}"#),
        );
        assert_eq!(decoded.status, DecodeStatus::Current);
        assert_eq!(decoded.records, vec![item("Alpha")]);
    }

    #[test]
    fn test_decode_legacy_array() {
        let decoded: Decoded<Item> = decode_collection("clubs", Some(r#"[{"name":"Old"}]"#));
        assert_eq!(decoded.status, DecodeStatus::Legacy);
        assert_eq!(decoded.records, vec![item("Old")]);
    }

    #[test]
    fn test_missing_value_is_empty() {
        let decoded: Decoded<Item> = decode_collection("clubs", None);
        assert_eq!(decoded.status, DecodeStatus::Missing);
        assert!(decoded.records.is_empty());
    }

    #[test]
    fn test_unreadable_values_fail_closed() {
        let cases = [
            "not json",
            r#"{"schema_version":2,"records":[]}"#,
            r#"{"records":[]}"#,
            r#"[{"title":"no name"}]"#,
            r#"{"schema_version":1,"records":[{"name":5}]}"#,
            "42",
        ];
        for raw in cases {
            let decoded: Decoded<Item> = decode_collection("clubs", Some(raw));
            assert!(
                matches!(decoded.status, DecodeStatus::Rejected(_)),
                "expected rejection for {}",
                raw
            );
            assert!(decoded.records.is_empty());
        }
    }
}
