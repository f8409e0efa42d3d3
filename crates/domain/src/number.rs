//! The request record and the squaring computation.

use serde_json::Value;

use crate::error::ValidationError;

/// A single-field request body: `{"number": <integer>}`.
///
/// Built transiently per request; it has no identity or lifecycle beyond
/// the request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRequest {
    pub number: i64,
}

impl NumberRequest {
    /// Name of the one field the body must carry.
    pub const FIELD: &'static str = "number";

    /// Decodes a raw JSON body into a request record.
    ///
    /// Rejects anything that is not a JSON object with an integer `number`
    /// field representable as `i64`. Floats (`3.5`), strings (`"abc"`),
    /// and out-of-range integers all fail the type check.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|err| ValidationError::InvalidJson {
                message: err.to_string(),
            })?;

        let Value::Object(fields) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let number = fields
            .get(Self::FIELD)
            .ok_or(ValidationError::MissingField { field: Self::FIELD })?;

        let number = number
            .as_i64()
            .ok_or(ValidationError::InvalidType {
                field: Self::FIELD,
                expected: "integer",
            })?;

        Ok(Self { number })
    }

    /// Returns `number * number` using plain integer arithmetic.
    ///
    /// Behavior outside the `i64` range is unspecified; no overflow
    /// handling is performed.
    pub fn square(self) -> i64 {
        self.number * self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_integer_field() {
        let req = NumberRequest::from_json(br#"{"number": 4}"#).unwrap();
        assert_eq!(req.number, 4);
    }

    #[test]
    fn test_decodes_negative_integer() {
        let req = NumberRequest::from_json(br#"{"number": -5}"#).unwrap();
        assert_eq!(req.number, -5);
    }

    #[test]
    fn test_ignores_extra_fields() {
        let req = NumberRequest::from_json(br#"{"number": 7, "other": true}"#).unwrap();
        assert_eq!(req.number, 7);
    }

    #[test]
    fn test_rejects_missing_field() {
        let err = NumberRequest::from_json(b"{}").unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "number" });
    }

    #[test]
    fn test_rejects_float() {
        let err = NumberRequest::from_json(br#"{"number": 3.5}"#).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidType {
                field: "number",
                expected: "integer",
            }
        );
    }

    #[test]
    fn test_rejects_string_value() {
        let err = NumberRequest::from_json(br#"{"number": "abc"}"#).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidType {
                field: "number",
                expected: "integer",
            }
        );
    }

    #[test]
    fn test_rejects_null_value() {
        let err = NumberRequest::from_json(br#"{"number": null}"#).unwrap_err();
        assert_eq!(err.kind(), "int_type");
    }

    #[test]
    fn test_rejects_non_object_body() {
        let err = NumberRequest::from_json(b"[1, 2, 3]").unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);

        let err = NumberRequest::from_json(b"42").unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = NumberRequest::from_json(b"not json").unwrap_err();
        assert_eq!(err.kind(), "json_invalid");
    }

    #[test]
    fn test_rejects_integer_beyond_i64() {
        let err = NumberRequest::from_json(br#"{"number": 18446744073709551615}"#).unwrap_err();
        assert_eq!(err.kind(), "int_type");
    }

    #[test]
    fn test_square() {
        assert_eq!(NumberRequest { number: 0 }.square(), 0);
        assert_eq!(NumberRequest { number: -5 }.square(), 25);
        assert_eq!(NumberRequest { number: 12 }.square(), 144);
    }

    #[test]
    fn test_square_large_magnitude() {
        assert_eq!(
            NumberRequest {
                number: 3_000_000_000
            }
            .square(),
            9_000_000_000_000_000_000
        );
    }
}
