//! Grid dimensions supplied by the flow model.
//!
//! # Invariants
//! - `layers`, `rows` and `columns` are all positive once constructed.
//! - `layers * rows * columns` fits in `usize`, so cell counts never overflow.

use crate::error::{DeckError, DeckResult};

/// Immutable model discretization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    layers: usize,
    rows: usize,
    columns: usize,
    stress_periods: usize,
}

impl GridShape {
    /// Creates a validated grid shape.
    ///
    /// # Errors
    /// - `InvalidGridShape` when any spatial dimension is zero, or when the
    ///   total cell count does not fit in `usize`.
    pub fn new(layers: usize, rows: usize, columns: usize, stress_periods: usize) -> DeckResult<Self> {
        let cell_count = layers
            .checked_mul(rows)
            .and_then(|count| count.checked_mul(columns));
        if layers == 0 || rows == 0 || columns == 0 || cell_count.is_none() {
            return Err(DeckError::InvalidGridShape {
                layers,
                rows,
                columns,
            });
        }
        Ok(Self {
            layers,
            rows,
            columns,
            stress_periods,
        })
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn stress_periods(&self) -> usize {
        self.stress_periods
    }

    /// Cells in one layer.
    pub fn layer_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Cells in the whole grid.
    pub fn cell_count(&self) -> usize {
        self.layers * self.layer_size()
    }
}

#[cfg(test)]
mod tests {
    use super::GridShape;
    use crate::error::DeckError;

    #[test]
    fn counts_cells() {
        let grid = GridShape::new(3, 4, 5, 1).unwrap();
        assert_eq!(grid.layer_size(), 20);
        assert_eq!(grid.cell_count(), 60);
    }

    #[test]
    fn rejects_empty_axes() {
        for (layers, rows, columns) in [(0, 1, 1), (1, 0, 1), (1, 1, 0)] {
            let err = GridShape::new(layers, rows, columns, 1).unwrap_err();
            assert!(matches!(err, DeckError::InvalidGridShape { .. }));
        }
    }

    #[test]
    fn rejects_unaddressable_cell_count() {
        for (layers, rows, columns) in [
            (usize::MAX / 2, 4, 1),
            (2, usize::MAX, 1),
            (1, usize::MAX / 2, 3),
        ] {
            let err = GridShape::new(layers, rows, columns, 1).unwrap_err();
            assert!(matches!(err, DeckError::InvalidGridShape { .. }));
        }
        let widest = GridShape::new(1, usize::MAX, 1, 1).unwrap();
        assert_eq!(widest.cell_count(), usize::MAX);
    }

    #[test]
    fn zero_stress_periods_is_allowed() {
        assert!(GridShape::new(1, 1, 1, 0).is_ok());
    }
}
