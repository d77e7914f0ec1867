// crates/cwmp-datamodel/src/error.rs

use crate::validate::Violation;
use core::fmt;
use hex::FromHexError;

/// Errors raised when parsing wire strings or manipulating ordered tables.
///
/// Setters never fail: constraint metadata is advisory and only the
/// validator reports violations.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A hexBinary parameter contained invalid hex.
    HexParsing(FromHexError),

    /// A MAC address was not six colon-separated hex octets.
    InvalidMacAddress { value: String },

    /// An IP prefix was not `<address>/<length>` or the length was out of range.
    InvalidIpPrefix { value: String },

    /// A string did not name any value of an enumeration.
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    /// Order values start at 1.
    InvalidOrder(u32),

    /// A table instance index was out of range.
    InstanceNotFound { index: usize, len: usize },

    /// The validator rejected the entity tree.
    Validation(Vec<Violation>),
}

impl From<FromHexError> for ModelError {
    fn from(e: FromHexError) -> Self {
        ModelError::HexParsing(e)
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::HexParsing(e) => write!(f, "Hex parsing error: {}", e),
            ModelError::InvalidMacAddress { value } => {
                write!(f, "Invalid MAC address: '{}'", value)
            }
            ModelError::InvalidIpPrefix { value } => write!(f, "Invalid IP prefix: '{}'", value),
            ModelError::UnknownEnumValue { type_name, value } => {
                write!(f, "'{}' is not a valid {} value", value, type_name)
            }
            ModelError::InvalidOrder(order) => {
                write!(f, "Invalid order value {}: order values start at 1", order)
            }
            ModelError::InstanceNotFound { index, len } => write!(
                f,
                "Instance index {} out of range for a table of {} entries",
                index, len
            ),
            ModelError::Validation(violations) => {
                write!(f, "{} validation violation(s)", violations.len())?;
                if let Some(first) = violations.first() {
                    write!(f, ", first: {}", first)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::HexParsing(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModelError;
    use crate::validate::{Violation, ViolationKind};

    #[test]
    fn test_from_hex_error() {
        let hex_err = hex::decode("Z").unwrap_err();
        let err: ModelError = hex_err.into();
        assert!(matches!(err, ModelError::HexParsing(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display_unknown_enum_value() {
        let err = ModelError::UnknownEnumValue {
            type_name: "DiagnosticsState",
            value: "Running".into(),
        };
        assert_eq!(
            err.to_string(),
            "'Running' is not a valid DiagnosticsState value"
        );
    }

    #[test]
    fn test_display_validation_mentions_first_violation() {
        let err = ModelError::Validation(vec![Violation {
            path: "Device.IP.Interface.1.MaxMTUSize".into(),
            kind: ViolationKind::AboveMaximum {
                value: 70000,
                max: 65535,
            },
        }]);
        let text = err.to_string();
        assert!(text.starts_with("1 validation violation(s)"));
        assert!(text.contains("Device.IP.Interface.1.MaxMTUSize"));
    }
}
