//! Control records and fixed-width data lines for resolved arrays.
//!
//! # Responsibility
//! - Emit the `INTERNAL`/`CONSTANT` control record of each array block.
//! - Wrap data values to the descriptor's columns per line.
//!
//! # Invariants
//! - A 3-D layer whose values are all identical is always written as one
//!   `CONSTANT` line, never as data.
//! - Every row of a 3-D layer starts on a new data line.
//! - Arrays are checked against the grid before any line is produced.

use crate::error::{DeckError, DeckResult};
use crate::format::descriptor::ArrayFormat;
use crate::model::array::{ArrayShape, ArrayValues, ResolvedArray};
use crate::model::grid::GridShape;

/// Printing flag passed to the reader; negative suppresses echo.
const IPRN: i32 = -1;

/// Serializes resolved arrays for one grid.
pub struct ArrayWriter {
    grid: GridShape,
}

impl ArrayWriter {
    pub fn new(grid: GridShape) -> Self {
        Self { grid }
    }

    /// Returns the lines for `array`, without trailing newlines.
    ///
    /// # Errors
    /// - `ShapeMismatch` when `array` does not fit the grid.
    /// - `KindMismatch` when `format` and `array` disagree on element kind.
    /// - `FieldOverflow` when a value is wider than `format.width`.
    pub fn write_array(&self, array: &ResolvedArray, format: &ArrayFormat) -> DeckResult<Vec<String>> {
        self.check(array, format)?;

        let name = array.name();
        let mut lines = Vec::new();
        match array.shape() {
            ArrayShape::PerLayer(_) => {
                lines.push(internal_line(format, name));
                let fields = format_fields(name, Values::of(array.values()), format)?;
                push_wrapped(&mut lines, &fields, format.per_line);
            }
            ArrayShape::PerCell { layers, rows, columns } => {
                let layer_size = rows * columns;
                for layer in 0..layers {
                    let label = format!("{name} layer {}", layer + 1);
                    let start = layer * layer_size;
                    let values = Values::of(array.values()).range(start, start + layer_size);

                    if let Some(constant) = constant_field(name, values, format)? {
                        lines.push(format!("CONSTANT {constant}  #{label}"));
                        continue;
                    }

                    lines.push(internal_line(format, &label));
                    let fields = format_fields(name, values, format)?;
                    for row in fields.chunks(columns) {
                        push_wrapped(&mut lines, row, format.per_line);
                    }
                }
            }
        }
        Ok(lines)
    }

    fn check(&self, array: &ResolvedArray, format: &ArrayFormat) -> DeckResult<()> {
        if let Some((axis, expected, found)) = array.shape().mismatch(&self.grid) {
            return Err(DeckError::ShapeMismatch {
                name: array.name().to_string(),
                axis,
                expected,
                found,
            });
        }
        if array.kind() != format.kind {
            return Err(DeckError::KindMismatch {
                name: array.name().to_string(),
                expected: format.kind,
                found: array.kind(),
            });
        }
        Ok(())
    }
}

fn internal_line(format: &ArrayFormat, label: &str) -> String {
    format!(
        "INTERNAL {} {} {IPRN}  #{label}",
        format.multiplier(),
        format.fortran()
    )
}

/// Borrowed view over part of an `ArrayValues`.
#[derive(Clone, Copy)]
enum Values<'a> {
    Integer(&'a [i32]),
    Real(&'a [f64]),
}

impl<'a> Values<'a> {
    fn of(values: &'a ArrayValues) -> Self {
        match values {
            ArrayValues::Integer(values) => Self::Integer(values),
            ArrayValues::Real(values) => Self::Real(values),
        }
    }

    fn range(self, start: usize, end: usize) -> Self {
        match self {
            Self::Integer(values) => Self::Integer(&values[start..end]),
            Self::Real(values) => Self::Real(&values[start..end]),
        }
    }
}

/// Formatted value when every element of `values` is identical.
fn constant_field(name: &str, values: Values<'_>, format: &ArrayFormat) -> DeckResult<Option<String>> {
    match values {
        Values::Integer(values) => match uniform(values) {
            Some(value) => format.format_integer(name, value).map(Some),
            None => Ok(None),
        },
        Values::Real(values) => match uniform(values) {
            Some(value) => format.format_real(name, value).map(Some),
            None => Ok(None),
        },
    }
}

fn uniform<T: Copy + PartialEq>(values: &[T]) -> Option<T> {
    match values.split_first() {
        Some((first, rest)) if rest.iter().all(|value| value == first) => Some(*first),
        _ => None,
    }
}

fn format_fields(name: &str, values: Values<'_>, format: &ArrayFormat) -> DeckResult<Vec<String>> {
    match values {
        Values::Integer(values) => values
            .iter()
            .map(|value| format.format_integer(name, *value))
            .collect(),
        Values::Real(values) => values
            .iter()
            .map(|value| format.format_real(name, *value))
            .collect(),
    }
}

fn push_wrapped(lines: &mut Vec<String>, fields: &[String], per_line: usize) {
    for chunk in fields.chunks(per_line.max(1)) {
        lines.push(chunk.concat());
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayWriter;
    use crate::error::DeckError;
    use crate::format::descriptor::ArrayFormat;
    use crate::model::array::{RawArray, ResolvedArray};
    use crate::model::grid::GridShape;

    #[test]
    fn per_layer_array_wraps_without_padding() {
        let grid = GridShape::new(3, 1, 1, 1).unwrap();
        let array = ResolvedArray::per_layer("laytyp", &grid, RawArray::Layered(vec![1, 0, 1])).unwrap();
        let format = ArrayFormat::integer(2, 2);

        let lines = ArrayWriter::new(grid).write_array(&array, &format).unwrap();
        assert_eq!(lines, vec!["INTERNAL 1 (2I2) -1  #laytyp", " 1 0", " 1"]);
    }

    #[test]
    fn rows_restart_data_lines() {
        let grid = GridShape::new(1, 2, 3, 1).unwrap();
        let array = ResolvedArray::per_cell("ibound", &grid, RawArray::Cells(vec![1, 0, 1, -1, 1, 1])).unwrap();
        let format = ArrayFormat::integer(3, 2);

        let lines = ArrayWriter::new(grid).write_array(&array, &format).unwrap();
        assert_eq!(
            lines,
            vec![
                "INTERNAL 1 (2I3) -1  #ibound layer 1",
                "  1  0",
                "  1",
                " -1  1",
                "  1",
            ]
        );
    }

    #[test]
    fn uniform_layer_uses_constant_form() {
        let grid = GridShape::new(2, 1, 2, 1).unwrap();
        let array = ResolvedArray::per_cell("ibound", &grid, RawArray::Cells(vec![1, 1, 0, 0])).unwrap();

        let lines = ArrayWriter::new(grid)
            .write_array(&array, &ArrayFormat::INTEGER_GRID)
            .unwrap();
        assert_eq!(
            lines,
            vec!["CONSTANT    1  #ibound layer 1", "CONSTANT    0  #ibound layer 2"]
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let grid = GridShape::new(1, 1, 1, 1).unwrap();
        let array = ResolvedArray::per_cell("prsity", &grid, RawArray::Constant(0.3)).unwrap();
        let err = ArrayWriter::new(grid)
            .write_array(&array, &ArrayFormat::INTEGER_GRID)
            .unwrap_err();
        assert!(matches!(err, DeckError::KindMismatch { .. }));
    }

    #[test]
    fn array_from_other_grid_is_a_shape_mismatch() {
        let small = GridShape::new(1, 1, 1, 1).unwrap();
        let large = GridShape::new(2, 1, 1, 1).unwrap();
        let array = ResolvedArray::per_layer("laytyp", &small, RawArray::Constant(0)).unwrap();

        let err = ArrayWriter::new(large)
            .write_array(&array, &ArrayFormat::LAYER_TYPE)
            .unwrap_err();
        match err {
            DeckError::ShapeMismatch { name, expected, found, .. } => {
                assert_eq!(name, "laytyp");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cell_array_reports_mismatched_axis() {
        let narrow = GridShape::new(2, 2, 2, 1).unwrap();
        let wide = GridShape::new(2, 2, 3, 1).unwrap();
        let array = ResolvedArray::per_cell("ibound", &narrow, RawArray::Constant(1)).unwrap();

        let err = ArrayWriter::new(wide)
            .write_array(&array, &ArrayFormat::INTEGER_GRID)
            .unwrap_err();
        assert!(matches!(
            err,
            DeckError::ShapeMismatch { axis: "columns", expected: 3, found: 2, .. }
        ));
    }

    #[test]
    fn each_layer_is_checked_for_uniformity_on_its_own() {
        let grid = GridShape::new(3, 1, 2, 1).unwrap();
        let array = ResolvedArray::per_cell(
            "prsity",
            &grid,
            RawArray::Cells(vec![0.3, 0.3, 0.3, 0.2, 0.2, 0.2]),
        )
        .unwrap();

        let lines = ArrayWriter::new(grid)
            .write_array(&array, &ArrayFormat::REAL_GRID)
            .unwrap();
        assert_eq!(
            lines,
            vec![
                "CONSTANT         0.300000  #prsity layer 1",
                "INTERNAL 1.0 (5F16.6) -1  #prsity layer 2",
                "        0.300000        0.200000",
                "CONSTANT         0.200000  #prsity layer 3",
            ]
        );
    }
}
