//! Validation error types.

use thiserror::Error;

/// Errors raised while decoding a request body into a
/// [`NumberRequest`](crate::NumberRequest).
///
/// Each variant carries enough structure for the HTTP layer to report the
/// offending location and a machine-readable error tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body is not syntactically valid JSON.
    #[error("JSON decode error: {message}")]
    InvalidJson { message: String },

    /// The body parsed, but the top level is not a JSON object.
    #[error("Input should be a valid object")]
    NotAnObject,

    /// A required field is absent from the body.
    #[error("Field required: {field}")]
    MissingField { field: &'static str },

    /// A field is present but does not have the expected type.
    #[error("Input should be a valid {expected}: {field}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Path of the offending value within the request, rooted at `body`.
    pub fn loc(&self) -> Vec<&'static str> {
        match self {
            Self::InvalidJson { .. } | Self::NotAnObject => vec!["body"],
            Self::MissingField { field } | Self::InvalidType { field, .. } => {
                vec!["body", field]
            }
        }
    }

    /// Machine-readable tag identifying the kind of rejection.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidJson { .. } => "json_invalid",
            Self::NotAnObject => "model_attributes_type",
            Self::MissingField { .. } => "missing",
            Self::InvalidType { .. } => "int_type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loc_points_at_field() {
        let err = ValidationError::MissingField { field: "number" };
        assert_eq!(err.loc(), vec!["body", "number"]);

        let err = ValidationError::InvalidType {
            field: "number",
            expected: "integer",
        };
        assert_eq!(err.loc(), vec!["body", "number"]);
    }

    #[test]
    fn test_loc_of_body_level_errors() {
        let err = ValidationError::InvalidJson {
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(err.loc(), vec!["body"]);
        assert_eq!(ValidationError::NotAnObject.loc(), vec!["body"]);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(
            ValidationError::MissingField { field: "number" }.kind(),
            "missing"
        );
        assert_eq!(
            ValidationError::InvalidType {
                field: "number",
                expected: "integer",
            }
            .kind(),
            "int_type"
        );
    }
}
