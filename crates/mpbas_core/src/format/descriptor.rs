//! Fixed-width array format descriptors and their presets.

use crate::error::{DeckError, DeckResult};
use std::fmt::{Display, Formatter};

/// Element kind of a serialized array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Integer,
    Real,
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Real => f.write_str("real"),
        }
    }
}

/// Width, wrapping and precision of one serialized array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayFormat {
    pub kind: ElementKind,
    /// Total characters per value, right-justified.
    pub width: usize,
    /// Values per data line before wrapping.
    pub per_line: usize,
    /// Fractional digits; ignored for integers.
    pub decimals: usize,
}

impl ArrayFormat {
    /// Layer-type codes: `(40I2)`.
    pub const LAYER_TYPE: Self = Self::integer(2, 40);
    /// Per-cell integer flags: `(20I4)`.
    pub const INTEGER_GRID: Self = Self::integer(4, 20);
    /// Per-cell reals: `(5F16.6)`.
    pub const REAL_GRID: Self = Self::real(16, 6, 5);

    pub const fn integer(width: usize, per_line: usize) -> Self {
        Self {
            kind: ElementKind::Integer,
            width,
            per_line,
            decimals: 0,
        }
    }

    pub const fn real(width: usize, decimals: usize, per_line: usize) -> Self {
        Self {
            kind: ElementKind::Real,
            width,
            per_line,
            decimals,
        }
    }

    /// FORTRAN edit descriptor, e.g. `(40I2)` or `(5F16.6)`.
    pub fn fortran(&self) -> String {
        match self.kind {
            ElementKind::Integer => format!("({}I{})", self.per_line, self.width),
            ElementKind::Real => format!("({}F{}.{})", self.per_line, self.width, self.decimals),
        }
    }

    /// Control-record multiplier literal for this kind.
    pub fn multiplier(&self) -> &'static str {
        match self.kind {
            ElementKind::Integer => "1",
            ElementKind::Real => "1.0",
        }
    }

    pub fn format_integer(&self, name: &str, value: i32) -> DeckResult<String> {
        fit(name, format!("{value:>width$}", width = self.width), self.width)
    }

    pub fn format_real(&self, name: &str, value: f64) -> DeckResult<String> {
        fit(
            name,
            format!(
                "{value:>width$.decimals$}",
                width = self.width,
                decimals = self.decimals
            ),
            self.width,
        )
    }

    /// Right-justified count, e.g. the number of records that follow.
    pub fn format_count(&self, name: &str, value: usize) -> DeckResult<String> {
        fit(name, format!("{value:>width$}", width = self.width), self.width)
    }
}

/// Left-justified text padded with spaces to exactly `width` bytes.
pub fn format_label(name: &str, label: &str, width: usize) -> DeckResult<String> {
    let mut field = label.to_string();
    if field.len() < width {
        field.push_str(&" ".repeat(width - field.len()));
    }
    fit(name, field, width)
}

fn fit(name: &str, field: String, width: usize) -> DeckResult<String> {
    if field.len() > width {
        return Err(DeckError::FieldOverflow {
            name: name.to_string(),
            value: field,
            width,
        });
    }
    Ok(field)
}
