use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One attestation as returned by the registry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AttestationRecord {
    pub attester: String,
    pub recipient: String,
    /// Decoded payload text, itself a JSON document.
    #[serde(rename = "decodedDataJson")]
    pub payload: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: FieldValue,
}

/// Scalar carried by a decoded field.
///
/// Equality and hashing are by value, which is what offering deduplication
/// relies on. Numbers keep their canonical JSON text so that they hash; values
/// that are not scalars keep their compact JSON text in `Composite`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Text(String),
    Number(String),
    Bool(bool),
    /// `{"type": "BigNumber", "hex": "0x.."}`, stored as lower-case hex.
    BigNumber(String),
    Composite(String),
}

impl FieldValue {
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => FieldValue::Number(n.to_string()),
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Object(ref map)
                if map.get("type").and_then(Value::as_str) == Some("BigNumber") =>
            {
                match map.get("hex").and_then(Value::as_str) {
                    Some(hex) => FieldValue::BigNumber(hex.to_ascii_lowercase()),
                    None => FieldValue::Composite(value.to_string()),
                }
            }
            other => FieldValue::Composite(other.to_string()),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::from_str(n).unwrap_or(Value::String(n.clone())),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::BigNumber(hex) => serde_json::json!({"type": "BigNumber", "hex": hex}),
            FieldValue::Composite(raw) => {
                serde_json::from_str(raw).unwrap_or(Value::String(raw.clone()))
            }
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => f.write_str(n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::BigNumber(hex) => f.write_str(hex),
            FieldValue::Composite(raw) => f.write_str(raw),
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub rank: usize,
    pub wallet: String,
    pub unique_count: usize,
}
