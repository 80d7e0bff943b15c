//! Repair and decoding of the detail endpoint's response body.
//!
//! The endpoint wraps its JSON object in one stray character on each side.
//! [`unwrap_envelope`] is the only place that knows about it.

use serde_json::{Map, Value};

use super::model::ProductDetail;
use crate::domain::errors::FetchError;

/// Turns a raw detail response body into a [`ProductDetail`].
pub fn parse_detail_body(body: &[u8]) -> Result<ProductDetail, FetchError> {
    let text = std::str::from_utf8(body).map_err(|_| FetchError::Encoding)?;
    let json = unwrap_envelope(text)?;
    decode_detail(json)
}

/// Drops exactly the first and the last character of `text`.
pub fn unwrap_envelope(text: &str) -> Result<&str, FetchError> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next().ok_or(FetchError::MalformedPayload)?;
    let (last_start, _) = chars.next_back().ok_or(FetchError::MalformedPayload)?;
    Ok(&text[first.len_utf8()..last_start])
}

/// Decodes a JSON object field by field.
///
/// Missing or mistyped fields fall back to their defaults instead of
/// rejecting the record.
pub fn decode_detail(json: &str) -> Result<ProductDetail, FetchError> {
    let parsed: Value = serde_json::from_str(json).map_err(|_| FetchError::MalformedPayload)?;
    let object = parsed.as_object().ok_or(FetchError::MalformedPayload)?;

    Ok(ProductDetail {
        id: integer_field(object, "id"),
        name: text_field(object, "name"),
        price: price_field(object, "price"),
        amount: integer_field(object, "amount"),
        image: text_field(object, "image"),
    })
}

fn integer_field(object: &Map<String, Value>, key: &str) -> u64 {
    object
        .get(key)
        .and_then(|value| {
            value.as_u64().or_else(|| {
                // integral floats such as `3.0` count as integers
                value
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
                    .map(|f| f as u64)
            })
        })
        .unwrap_or(0)
}

fn price_field(object: &Map<String, Value>, key: &str) -> f64 {
    object
        .get(key)
        .and_then(|value| value.as_f64())
        .filter(|price| price.is_finite() && *price >= 0.0)
        .unwrap_or(0.0)
}

fn text_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(|value| value.as_str())
        .unwrap_or("")
        .to_string()
}
