use crate::domain::models::{DecodedField, FieldValue};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    value: RawValue,
}

/// The registry repeats name/type inside the wrapper; only `value` is used.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RawValue {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    value: serde_json::Value,
}

/// Parses one attestation payload into its fields, in source order.
///
/// The payload must be a JSON array of `{name, type, value: {name, type, value}}`
/// objects; any deviation fails the whole payload rather than dropping the
/// offending element.
pub fn decode_payload(payload: &str) -> Result<Vec<DecodedField>, serde_json::Error> {
    let raw: Vec<RawField> = serde_json::from_str(payload)?;
    Ok(raw
        .into_iter()
        .map(|f| DecodedField {
            name: f.name,
            kind: f.kind,
            value: FieldValue::from_json(f.value.value),
        })
        .collect())
}
