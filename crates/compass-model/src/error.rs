//! Error types for the compass model.

use thiserror::Error;

use crate::RingGroup;

/// Result type for compass operations.
pub type Result<T> = std::result::Result<T, CompassError>;

/// Errors that can occur when checking, rotating or parsing a compass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompassError {
    /// A ring group entry has a bit pattern with no defined name
    #[error("unsupported ring group pattern {0:#05b}")]
    UnsupportedRingGroupPattern(u8),

    /// The compass lists no ring groups at all
    #[error("compass has no ring groups")]
    EmptyRingGroups,

    /// Tried to rotate a group the compass does not support
    #[error("ring group {0:?} is not supported by this compass")]
    UnsupportedRingGroup(RingGroup),

    /// Canonical string could not be parsed
    #[error("invalid compass string `{input}`: {reason}")]
    Parse {
        input: String,
        reason: ParseErrorKind,
    },
}

/// Why a canonical compass string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("missing `/` between rings and ring groups")]
    MissingGroupDelimiter,

    #[error("expected 3 ring fields, found {0}")]
    WrongRingCount(usize),

    #[error("malformed ring field `{0}`")]
    MalformedRing(String),

    #[error("location {0} is outside 0..6")]
    LocationOutOfRange(i64),

    #[error("speed {0} is outside -5..=5")]
    SpeedOutOfRange(i64),

    #[error("unknown ring group code `{0}`")]
    UnknownRingGroupCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_rendered_as_three_bits() {
        let err = CompassError::UnsupportedRingGroupPattern(0b111);
        assert_eq!(err.to_string(), "unsupported ring group pattern 0b111");

        let err = CompassError::UnsupportedRingGroupPattern(0);
        assert_eq!(err.to_string(), "unsupported ring group pattern 0b000");
    }

    #[test]
    fn parse_error_carries_input() {
        let err = CompassError::Parse {
            input: "0+0".to_string(),
            reason: ParseErrorKind::MissingGroupDelimiter,
        };
        assert_eq!(
            err.to_string(),
            "invalid compass string `0+0`: missing `/` between rings and ring groups"
        );
    }
}
