use crate::core::geometry::{Location, Shape};

/// Error returned by board region operations.
///
/// Every precondition is checked before any cell is touched, so a failed
/// operation leaves the board and its counters exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("rectangle {shape} at {location} extends outside the board")]
    OutOfBounds { location: Location, shape: Shape },
    #[display("rectangle {shape} at {location} overlaps a filled cell")]
    NotEmpty { location: Location, shape: Shape },
    #[display("rectangle {shape} at {location} covers an empty cell")]
    NotFull { location: Location, shape: Shape },
}

/// A rectangular grid of filled/empty cells with incremental fill tracking.
///
/// Besides the cell grid itself, the board maintains one counter per row and
/// per column holding the number of filled cells in that line. The counters
/// make full-line detection O(width + height), which matters because the
/// expert heuristic consults them for every candidate placement.
///
/// Counter invariant (holds between any two operations): `row_counters[i]`
/// equals the number of filled cells in row `i`, and symmetrically for
/// columns. A row is *full* iff its counter equals the board width; a column
/// is *full* iff its counter equals the board height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    shape: Shape,
    cells: Vec<bool>,
    row_counters: Vec<usize>,
    column_counters: Vec<usize>,
}

impl Board {
    /// Creates an empty board of the given dimensions.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            cells: vec![false; shape.width() * shape.height()],
            row_counters: vec![0; shape.height()],
            column_counters: vec![0; shape.width()],
        }
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.shape.width()
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.shape.height()
    }

    #[must_use]
    pub fn row_counters(&self) -> &[usize] {
        &self.row_counters
    }

    #[must_use]
    pub fn column_counters(&self) -> &[usize] {
        &self.column_counters
    }

    /// Returns the state of a single cell, or `None` if the location is
    /// outside the grid.
    #[must_use]
    pub fn cell(&self, location: Location) -> Option<bool> {
        if location.row >= self.height() || location.column >= self.width() {
            return None;
        }
        Some(self.filled(location.row, location.column))
    }

    /// Returns the rows of the grid in index order, each as a slice of cell
    /// states. Intended for rendering.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[bool]> {
        self.cells.chunks(self.width())
    }

    pub(crate) fn filled(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.width() + column]
    }

    fn check_bounds(&self, location: Location, shape: Shape) -> Result<(), BoardError> {
        if location.row + shape.height() > self.height()
            || location.column + shape.width() > self.width()
        {
            return Err(BoardError::OutOfBounds { location, shape });
        }
        Ok(())
    }

    /// Cell indices covered by an in-bounds rectangle, row-major.
    fn region(width: usize, location: Location, shape: Shape) -> impl Iterator<Item = usize> {
        (location.row..location.row + shape.height()).flat_map(move |row| {
            (location.column..location.column + shape.width())
                .map(move |column| row * width + column)
        })
    }

    /// Returns true iff every cell covered by the rectangle is empty.
    pub fn is_empty(&self, location: Location, shape: Shape) -> Result<bool, BoardError> {
        self.check_bounds(location, shape)?;
        Ok(Self::region(self.width(), location, shape).all(|i| !self.cells[i]))
    }

    /// Returns true iff every cell covered by the rectangle is filled.
    pub fn is_full(&self, location: Location, shape: Shape) -> Result<bool, BoardError> {
        self.check_bounds(location, shape)?;
        Ok(Self::region(self.width(), location, shape).all(|i| self.cells[i]))
    }

    /// Fills every cell covered by the rectangle and updates the counters:
    /// each covered row gains `shape.width()` filled cells and each covered
    /// column gains `shape.height()`.
    pub fn put(&mut self, location: Location, shape: Shape) -> Result<(), BoardError> {
        if !self.is_empty(location, shape)? {
            return Err(BoardError::NotEmpty { location, shape });
        }
        for i in Self::region(self.width(), location, shape) {
            self.cells[i] = true;
        }
        for row in location.row..location.row + shape.height() {
            self.row_counters[row] += shape.width();
        }
        for column in location.column..location.column + shape.width() {
            self.column_counters[column] += shape.height();
        }
        Ok(())
    }

    /// Clears every cell covered by the rectangle, updating the counters
    /// symmetrically to [`Self::put`].
    pub fn remove(&mut self, location: Location, shape: Shape) -> Result<(), BoardError> {
        if !self.is_full(location, shape)? {
            return Err(BoardError::NotFull { location, shape });
        }
        for i in Self::region(self.width(), location, shape) {
            self.cells[i] = false;
        }
        for row in location.row..location.row + shape.height() {
            self.row_counters[row] -= shape.width();
        }
        for column in location.column..location.column + shape.width() {
            self.column_counters[column] -= shape.height();
        }
        Ok(())
    }

    /// Indices of completely filled rows, ascending.
    #[must_use]
    pub fn full_rows(&self) -> Vec<usize> {
        let width = self.width();
        (0..self.height())
            .filter(|&row| self.row_counters[row] == width)
            .collect()
    }

    /// Indices of completely filled columns, ascending.
    #[must_use]
    pub fn full_columns(&self) -> Vec<usize> {
        let height = self.height();
        (0..self.width())
            .filter(|&column| self.column_counters[column] == height)
            .collect()
    }

    /// Empties the given rows, decrementing the column counter of every cell
    /// that was filled. The row indices must be valid; processing order does
    /// not affect the final state.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        for &row in rows {
            self.row_counters[row] = 0;
        }
        for &row in rows {
            for column in 0..self.width() {
                let i = row * self.width() + column;
                if self.cells[i] {
                    self.column_counters[column] -= 1;
                    self.cells[i] = false;
                }
            }
        }
    }

    /// Empties the given columns, decrementing the row counter of every cell
    /// that was filled. Symmetric to [`Self::clear_rows`].
    pub fn clear_columns(&mut self, columns: &[usize]) {
        for &column in columns {
            self.column_counters[column] = 0;
        }
        for row in 0..self.height() {
            for &column in columns {
                let i = row * self.width() + column;
                if self.cells[i] {
                    self.row_counters[row] -= 1;
                    self.cells[i] = false;
                }
            }
        }
    }
}
