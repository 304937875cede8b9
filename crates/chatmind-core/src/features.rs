//! Pricing plan features column codec.
//!
//! The store keeps a plan's feature list as a single text column holding a
//! JSON array of strings, e.g. `["1 Chatbot","Email support"]`. Decoding must
//! return the exact ordered sequence that was encoded.

use crate::error::Result;

/// Encode a feature list into its stored text form
pub fn encode_features(features: &[String]) -> Result<String> {
    Ok(serde_json::to_string(features)?)
}

/// Decode a stored feature blob
pub fn decode_features(encoded: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(encoded)?)
}
