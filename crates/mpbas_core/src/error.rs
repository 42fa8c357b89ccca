//! Error taxonomy for deck resolution, serialization and output.
//!
//! # Responsibility
//! - Give every failure a variant that names the offending attribute or array.
//! - Wrap stream failures without losing the underlying `io::Error`.
//!
//! # Invariants
//! - Every variant is fatal for the current deck write; none is retried.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::format::descriptor::ElementKind;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Debug)]
pub enum DeckError {
    /// No explicit value was given and no sibling package supplied one.
    MissingRequiredAttribute {
        attribute: String,
        reason: &'static str,
    },
    /// Array extent disagrees with the grid along `axis`.
    ShapeMismatch {
        name: String,
        axis: &'static str,
        expected: usize,
        found: usize,
    },
    InvalidGridShape {
        layers: usize,
        rows: usize,
        columns: usize,
    },
    KindMismatch {
        name: String,
        expected: ElementKind,
        found: ElementKind,
    },
    /// A formatted value does not fit its fixed-width field.
    FieldOverflow {
        name: String,
        value: String,
        width: usize,
    },
    Io(std::io::Error),
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredAttribute { attribute, reason } => {
                write!(f, "missing required attribute `{attribute}`: {reason}")
            }
            Self::ShapeMismatch {
                name,
                axis,
                expected,
                found,
            } => write!(
                f,
                "shape mismatch for `{name}`: expected {expected} {axis}, found {found}"
            ),
            Self::InvalidGridShape {
                layers,
                rows,
                columns,
            } => write!(
                f,
                "grid dimensions must be positive with an addressable cell count, got layers={layers} rows={rows} columns={columns}"
            ),
            Self::KindMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "element kind mismatch for `{name}`: format expects {expected}, array holds {found}"
            ),
            Self::FieldOverflow { name, value, width } => write!(
                f,
                "value `{value}` of `{name}` does not fit a field of width {width}"
            ),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DeckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeckError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::DeckError;
    use std::error::Error;

    #[test]
    fn messages_name_the_offending_array() {
        let err = DeckError::ShapeMismatch {
            name: "laytyp".to_string(),
            axis: "layers",
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch for `laytyp`: expected 3 layers, found 2"
        );

        let err = DeckError::MissingRequiredAttribute {
            attribute: "ibound".to_string(),
            reason: "BAS6 package is not present",
        };
        assert!(err.to_string().contains("`ibound`"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = DeckError::from(std::io::Error::other("disk full"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "disk full");
    }
}
