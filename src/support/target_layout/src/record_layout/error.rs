use data_units::ByteUnits;
use std::fmt::Display;

/// The one way layout computation can fail: the supplied spec violates
/// the engine's preconditions. Detected before any offset is computed,
/// so there is never a partial result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidConfiguration {
    PackCapNotPowerOfTwo { cap: ByteUnits },
    FieldSizeZero { field: String },
    FieldAlignmentNotPowerOfTwo { field: String, alignment: ByteUnits },
}

impl Display for InvalidConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PackCapNotPowerOfTwo { cap } => {
                write!(f, "Pack cap must be a positive power of 2, got {}", cap)
            }
            Self::FieldSizeZero { field } => {
                write!(f, "Field '{}' must have a positive size", field)
            }
            Self::FieldAlignmentNotPowerOfTwo { field, alignment } => {
                write!(
                    f,
                    "Field '{}' must have a power-of-2 alignment, got {}",
                    field, alignment
                )
            }
        }
    }
}

impl std::error::Error for InvalidConfiguration {}
