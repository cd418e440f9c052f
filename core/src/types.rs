//! Domain DTOs for the calculator API.

use serde::Serialize;

/// Two validated integer operands.
///
/// Created by [`parse_operands`](crate::parse_operands) with missing fields
/// already defaulted to `0`; consumed immediately by
/// [`Operation::apply`](crate::Operation::apply). Never mutated after
/// creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperandPair {
    pub a: i64,
    pub b: i64,
}

/// A computed result, serialized as `{"result": value}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    #[serde(rename = "result")]
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_under_result_key() {
        let json = serde_json::to_value(OperationResult { value: 8 }).unwrap();
        assert_eq!(json, serde_json::json!({"result": 8}));
    }

    #[test]
    fn result_serializes_negative_values() {
        let json = serde_json::to_string(&OperationResult { value: -15 }).unwrap();
        assert_eq!(json, r#"{"result":-15}"#);
    }
}
