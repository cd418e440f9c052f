//! Request validation pipeline.
//!
//! # Design
//! Validation short-circuits on the first failure, in a fixed order:
//! Content-Type, JSON syntax, field allowlist, field types. The decode is
//! strict — unknown fields are rejected rather than ignored — so the body is
//! walked as a `serde_json::Value` against an explicit allowlist instead of
//! going through a serde derive (a derive's error cannot report which field
//! held the wrong type, and the rejection message carries the field name).

use serde_json::error::Category;
use serde_json::Value;

use crate::error::ApiError;
use crate::types::OperandPair;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Validate a request's Content-Type and body, producing the operand pair.
///
/// `content_type` is the raw header value, `None` when the header is absent.
/// Absent or empty is accepted and treated as JSON; anything else must begin
/// with `application/json` (parameters such as `; charset=utf-8` may
/// follow). Missing `a` or `b` fields default to `0`, so `{"a":5}` is
/// equivalent to `{"a":5,"b":0}`.
pub fn parse_operands(content_type: Option<&str>, body: &[u8]) -> Result<OperandPair, ApiError> {
    if let Some(value) = content_type {
        if !value.is_empty() && !value.starts_with(JSON_CONTENT_TYPE) {
            return Err(ApiError::UnsupportedMediaType);
        }
    }
    decode_strict(body)
}

fn decode_strict(body: &[u8]) -> Result<OperandPair, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| match err.classify() {
        Category::Syntax => ApiError::MalformedJson,
        _ => ApiError::InvalidFormat,
    })?;
    let fields = value.as_object().ok_or(ApiError::InvalidFormat)?;

    let mut operands = OperandPair::default();
    for (name, value) in fields {
        let slot = match name.as_str() {
            "a" => &mut operands.a,
            "b" => &mut operands.b,
            _ => return Err(ApiError::UnknownField),
        };
        *slot = value
            .as_i64()
            .ok_or_else(|| ApiError::InvalidFieldType { field: name.clone() })?;
    }
    Ok(operands)
}
