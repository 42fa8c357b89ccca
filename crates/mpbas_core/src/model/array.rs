//! Raw value sources and shape-validated resolved arrays.
//!
//! # Responsibility
//! - Accept caller values as a scalar, a per-layer list or a full cell list.
//! - Broadcast them to a concrete, typed array exactly once.
//!
//! # Invariants
//! - A `ResolvedArray` holds one value per layer (`PerLayer`) or one value per
//!   grid cell (`PerCell`), never more or fewer.
//! - Resolved arrays are never mutated after construction.

use crate::error::{DeckError, DeckResult};
use crate::format::descriptor::ElementKind;
use crate::model::grid::GridShape;
use serde::{Deserialize, Serialize};

/// Caller-facing value source for one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawArray<T> {
    /// One value broadcast over the whole shape.
    Constant(T),
    /// One value per layer.
    Layered(Vec<T>),
    /// Every cell, layer-major then row-major.
    Cells(Vec<T>),
}

/// Element types that can live in a resolved array.
pub trait Element: Copy + PartialEq {
    fn into_values(values: Vec<Self>) -> ArrayValues;
}

impl Element for i32 {
    fn into_values(values: Vec<Self>) -> ArrayValues {
        ArrayValues::Integer(values)
    }
}

impl Element for f64 {
    fn into_values(values: Vec<Self>) -> ArrayValues {
        ArrayValues::Real(values)
    }
}

/// Typed storage of a resolved array.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValues {
    Integer(Vec<i32>),
    Real(Vec<f64>),
}

impl ArrayValues {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Integer(_) => ElementKind::Integer,
            Self::Real(_) => ElementKind::Real,
        }
    }
}

/// Dimensionality of a resolved array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayShape {
    PerLayer(usize),
    PerCell {
        layers: usize,
        rows: usize,
        columns: usize,
    },
}

impl ArrayShape {
    /// First axis on which this shape disagrees with `grid`, as
    /// `(axis, expected, found)`.
    pub fn mismatch(&self, grid: &GridShape) -> Option<(&'static str, usize, usize)> {
        match *self {
            Self::PerLayer(layers) => differs("layers", grid.layers(), layers),
            Self::PerCell {
                layers,
                rows,
                columns,
            } => differs("layers", grid.layers(), layers)
                .or_else(|| differs("rows", grid.rows(), rows))
                .or_else(|| differs("columns", grid.columns(), columns)),
        }
    }
}

/// Named, shape-checked array ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArray {
    name: String,
    shape: ArrayShape,
    values: ArrayValues,
}

impl ResolvedArray {
    /// Builds a 1-D array with one value per layer.
    ///
    /// `Cells` is accepted as long as it holds exactly one value per layer.
    pub fn per_layer<T: Element>(
        name: impl Into<String>,
        grid: &GridShape,
        raw: RawArray<T>,
    ) -> DeckResult<Self> {
        let name = name.into();
        let layers = grid.layers();
        let values = match raw {
            RawArray::Constant(value) => vec![value; layers],
            RawArray::Layered(values) | RawArray::Cells(values) => {
                expect_len(&name, "layers", layers, values.len())?;
                values
            }
        };

        Ok(Self {
            name,
            shape: ArrayShape::PerLayer(layers),
            values: T::into_values(values),
        })
    }

    /// Builds a 3-D array covering every cell of `grid`.
    pub fn per_cell<T: Element>(
        name: impl Into<String>,
        grid: &GridShape,
        raw: RawArray<T>,
    ) -> DeckResult<Self> {
        let name = name.into();
        let values = match raw {
            RawArray::Constant(value) => vec![value; grid.cell_count()],
            RawArray::Layered(per_layer) => {
                expect_len(&name, "layers", grid.layers(), per_layer.len())?;
                per_layer
                    .into_iter()
                    .flat_map(|value| std::iter::repeat(value).take(grid.layer_size()))
                    .collect()
            }
            RawArray::Cells(cells) => {
                expect_len(&name, "cells", grid.cell_count(), cells.len())?;
                cells
            }
        };

        Ok(Self {
            name,
            shape: ArrayShape::PerCell {
                layers: grid.layers(),
                rows: grid.rows(),
                columns: grid.columns(),
            },
            values: T::into_values(values),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> ArrayShape {
        self.shape
    }

    pub fn values(&self) -> &ArrayValues {
        &self.values
    }

    pub fn kind(&self) -> ElementKind {
        self.values.kind()
    }

    /// Integer values, or `None` for a real array.
    pub fn as_integers(&self) -> Option<&[i32]> {
        match &self.values {
            ArrayValues::Integer(values) => Some(values.as_slice()),
            ArrayValues::Real(_) => None,
        }
    }

    /// Real values, or `None` for an integer array.
    pub fn as_reals(&self) -> Option<&[f64]> {
        match &self.values {
            ArrayValues::Real(values) => Some(values.as_slice()),
            ArrayValues::Integer(_) => None,
        }
    }
}

fn differs(axis: &'static str, expected: usize, found: usize) -> Option<(&'static str, usize, usize)> {
    (expected != found).then_some((axis, expected, found))
}

fn expect_len(name: &str, axis: &'static str, expected: usize, found: usize) -> DeckResult<()> {
    if expected != found {
        return Err(DeckError::ShapeMismatch {
            name: name.to_string(),
            axis,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ArrayShape, RawArray, ResolvedArray};
    use crate::error::DeckError;
    use crate::format::descriptor::ElementKind;
    use crate::model::grid::GridShape;

    fn grid() -> GridShape {
        GridShape::new(2, 2, 3, 1).unwrap()
    }

    #[test]
    fn layered_values_broadcast_over_each_layer() {
        let array = ResolvedArray::per_cell("ibound", &grid(), RawArray::Layered(vec![1, -1])).unwrap();
        assert_eq!(
            array.as_integers().unwrap(),
            &[1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1]
        );
        assert_eq!(array.kind(), ElementKind::Integer);
    }

    #[test]
    fn constant_fills_per_layer_shape() {
        let array = ResolvedArray::per_layer("laytyp", &grid(), RawArray::Constant(1)).unwrap();
        assert_eq!(array.shape(), ArrayShape::PerLayer(2));
        assert_eq!(array.as_integers().unwrap(), &[1, 1]);
    }

    #[test]
    fn wrong_cell_count_is_a_shape_mismatch() {
        let err = ResolvedArray::per_cell("prsity", &grid(), RawArray::Cells(vec![0.3; 11])).unwrap_err();
        match err {
            DeckError::ShapeMismatch {
                name,
                axis,
                expected,
                found,
            } => {
                assert_eq!(name, "prsity");
                assert_eq!(axis, "cells");
                assert_eq!(expected, 12);
                assert_eq!(found, 11);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mismatch_reports_first_differing_axis() {
        let array = ResolvedArray::per_cell("prsity", &grid(), RawArray::Constant(0.3)).unwrap();
        assert_eq!(array.shape().mismatch(&grid()), None);
        assert_eq!(
            array.shape().mismatch(&GridShape::new(2, 3, 2, 1).unwrap()),
            Some(("rows", 3, 2))
        );

        let laytyp = ResolvedArray::per_layer("laytyp", &grid(), RawArray::Constant(1)).unwrap();
        assert_eq!(laytyp.shape().mismatch(&GridShape::new(2, 9, 9, 1).unwrap()), None);
        assert_eq!(
            laytyp.shape().mismatch(&GridShape::new(4, 2, 3, 1).unwrap()),
            Some(("layers", 4, 2))
        );
    }
}
