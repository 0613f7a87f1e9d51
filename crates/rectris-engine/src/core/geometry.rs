/// Error returned when constructing a [`Shape`] with a zero dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("shape dimensions must be positive")]
pub struct InvalidShapeError;

/// Footprint of a piece or query rectangle, in cells.
///
/// Both dimensions are guaranteed positive: the only way to obtain a `Shape`
/// is through [`Shape::new`], which rejects zero-sized rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{width}x{height}")]
pub struct Shape {
    width: usize,
    height: usize,
}

impl Shape {
    /// A single cell.
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    pub const fn new(width: usize, height: usize) -> Result<Self, InvalidShapeError> {
        if width == 0 || height == 0 {
            return Err(InvalidShapeError);
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Returns true if this shape fits inside `container` without rotation.
    #[must_use]
    pub const fn fits_within(self, container: Shape) -> bool {
        self.width <= container.width && self.height <= container.height
    }
}

/// Position of a rectangle's reference corner on the board.
///
/// The reference corner is the one with the smallest row and column index.
/// Rows and columns are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {column})")]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
