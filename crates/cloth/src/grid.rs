//! The shape of the rectangular grid of point masses.

/// The default edge length of a parallel block of grid points.
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// The shape of a rectangular grid of point masses.
///
/// Points are addressed by a linear index `y * width + x`, where `x` grows towards the east and `y` grows towards the south. Both `width` and `height`
/// must be positive multiples of the `block_size`, which is the edge length of the square blocks of points that are handed to worker threads together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// The number of points along the `x` axis.
    width: usize,
    /// The number of points along the `y` axis.
    height: usize,
    /// The edge length of a parallel block.
    block_size: usize,
}

impl GridShape {
    /// Creates a new `GridShape` with the default block size of 4.
    ///
    /// # Errors
    ///
    /// - If `width` or `height` is zero.
    /// - If `width` or `height` is not a multiple of the block size.
    pub fn new(width: usize, height: usize) -> Result<Self, String> {
        Self::with_block_size(width, height, DEFAULT_BLOCK_SIZE)
    }

    /// Creates a new `GridShape` with the given block size.
    ///
    /// # Errors
    ///
    /// - If `block_size` is zero.
    /// - If `width` or `height` is zero.
    /// - If `width` or `height` is not a multiple of `block_size`.
    pub fn with_block_size(width: usize, height: usize, block_size: usize) -> Result<Self, String> {
        if block_size == 0 {
            return Err("Block size must be positive".to_string());
        }
        if width == 0 || height == 0 {
            return Err(format!("Grid dimensions must be positive, got {width}x{height}"));
        }
        if width % block_size != 0 || height % block_size != 0 {
            return Err(format!("Grid dimensions {width}x{height} must be multiples of the block size {block_size}"));
        }
        Ok(Self { width, height, block_size })
    }

    /// The reference deployment: 15 x 7 blocks of 4 x 4 points, i.e. a 60 x 28 grid.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            width: 15 * DEFAULT_BLOCK_SIZE,
            height: 7 * DEFAULT_BLOCK_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Returns the number of points along the `x` axis.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of points along the `y` axis.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the edge length of a parallel block.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the number of points in a parallel block.
    #[must_use]
    pub const fn block_len(&self) -> usize {
        self.block_size * self.block_size
    }

    /// Returns the total number of points in the grid.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always `false`, since a valid grid has at least one block of points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the linear index of the point at `(x, y)`.
    ///
    /// The caller must ensure that `x < width` and `y < height`.
    #[must_use]
    pub const fn linear_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the `(x, y)` coordinates of the point with the given linear index.
    #[must_use]
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Whether the signed coordinates `(x, y)` lie inside the grid.
    #[must_use]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.width) && usize::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Returns the linear index of the point at `offset` from the point at `index`, or `None` if that point lies outside the grid.
    #[must_use]
    pub fn offset_index(&self, index: usize, (dx, dy): (isize, isize)) -> Option<usize> {
        let (x, y) = self.coords(index);
        let x = x.checked_add_signed(dx)?;
        let y = y.checked_add_signed(dy)?;
        (x < self.width && y < self.height).then(|| self.linear_index(x, y))
    }
}
