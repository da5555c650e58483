//! Tolerant JSON extraction from free-form oracle replies.
//!
//! Oracles are instructed to answer with bare JSON but routinely wrap it
//! in markdown fences or surrounding prose. This parser strips the
//! wrapping, slices the outermost object, and validates the keys the
//! caller needs. It is shared by the extraction and classification call
//! sites, which differ only in their required keys.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why an oracle reply could not be used.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// No JSON object delimiters were found in the reply.
    #[error("no JSON object found in reply")]
    NoJsonFound,

    /// The sliced object did not parse as strict JSON.
    #[error("invalid JSON in reply: {0}")]
    InvalidJson(String),

    /// The object parsed but lacks a key the caller requires.
    #[error("reply is missing required field `{0}`")]
    MissingField(String),
}

/// Extract a JSON object from `reply`, requiring every key in
/// `required_keys` to be present.
///
/// Code-fence markers are removed first, then the substring from the
/// first `{` to the last `}` is parsed strictly. Malformed input never
/// panics; it comes back as a [`ParseFailure`].
pub fn extract_json(
    reply: &str,
    required_keys: &[&str],
) -> Result<Map<String, Value>, ParseFailure> {
    let stripped = reply.replace("```json", "").replace("```", "");
    let stripped = stripped.trim();

    let start = stripped.find('{').ok_or(ParseFailure::NoJsonFound)?;
    let end = stripped.rfind('}').ok_or(ParseFailure::NoJsonFound)?;
    if end < start {
        return Err(ParseFailure::NoJsonFound);
    }

    let value: Value = serde_json::from_str(&stripped[start..=end])
        .map_err(|e| ParseFailure::InvalidJson(e.to_string()))?;

    let object = match value {
        Value::Object(map) => map,
        _ => return Err(ParseFailure::NoJsonFound),
    };

    for key in required_keys {
        if !object.contains_key(*key) {
            return Err(ParseFailure::MissingField((*key).to_string()));
        }
    }

    Ok(object)
}
