//! The fixed-pattern connectivity of the grid.

use crate::GridShape;

/// The number of neighbor slots of every grid point.
pub const NEIGHBOR_COUNT: usize = 12;

/// One of the twelve neighbor slots of a grid point, in table order.
///
/// The first eight slots are the structural neighbors at a distance of one cell, clockwise from north. The last four are the bending neighbors two cells
/// away along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborSlot {
    /// One cell north.
    North,
    /// One cell north-east.
    NorthEast,
    /// One cell east.
    East,
    /// One cell south-east.
    SouthEast,
    /// One cell south.
    South,
    /// One cell south-west.
    SouthWest,
    /// One cell west.
    West,
    /// One cell north-west.
    NorthWest,
    /// Two cells north.
    NorthBend,
    /// Two cells east.
    EastBend,
    /// Two cells south.
    SouthBend,
    /// Two cells west.
    WestBend,
}

impl NeighborSlot {
    /// All slots, in table order.
    pub const ALL: [Self; NEIGHBOR_COUNT] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthBend,
        Self::EastBend,
        Self::SouthBend,
        Self::WestBend,
    ];

    /// The bending slots. A point missing any of these is an edge point.
    pub const BENDS: [Self; 4] = [Self::NorthBend, Self::EastBend, Self::SouthBend, Self::WestBend];

    /// Returns the position of this slot in a table entry.
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Returns the `(dx, dy)` grid offset of this slot. `y` grows towards the south.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
            Self::NorthBend => (0, -2),
            Self::EastBend => (2, 0),
            Self::SouthBend => (0, 2),
            Self::WestBend => (-2, 0),
        }
    }

    /// Returns the slot pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::NorthBend => Self::SouthBend,
            Self::EastBend => Self::WestBend,
            Self::SouthBend => Self::NorthBend,
            Self::WestBend => Self::EastBend,
        }
    }

    /// Whether this is one of the bending slots.
    #[must_use]
    pub const fn is_bend(self) -> bool {
        matches!(self, Self::NorthBend | Self::EastBend | Self::SouthBend | Self::WestBend)
    }
}

/// A neighbor descriptor: the linear index of the neighbor and whether it lies inside the grid.
///
/// The index of an invalid neighbor is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    /// The linear index of the neighbor.
    index: usize,
    /// Whether the neighbor lies inside the grid.
    valid: bool,
}

impl Neighbor {
    /// Creates a valid neighbor descriptor.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index, valid: true }
    }

    /// Creates an invalid neighbor descriptor. The index is kept but never read.
    #[must_use]
    pub const fn invalid(index: usize) -> Self {
        Self { index, valid: false }
    }

    /// Returns the linear index of the neighbor.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the neighbor lies inside the grid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns `1.0` for a valid neighbor and `0.0` otherwise.
    #[must_use]
    pub fn flag(&self) -> f32 {
        f32::from(u8::from(self.valid))
    }
}

/// The immutable table of the twelve neighbor descriptors of every grid point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborTable {
    /// One entry per grid point, indexed by linear index.
    entries: Vec<[Neighbor; NEIGHBOR_COUNT]>,
}

impl NeighborTable {
    /// Builds the table for a regular rectangular grid.
    ///
    /// Neighbors falling outside the grid are marked invalid and point back at the point itself.
    #[must_use]
    pub fn for_grid(shape: &GridShape) -> Self {
        let entries = (0..shape.len())
            .map(|i| {
                NeighborSlot::ALL.map(|slot| {
                    shape
                        .offset_index(i, slot.offset())
                        .map_or_else(|| Neighbor::invalid(i), Neighbor::new)
                })
            })
            .collect();
        Self { entries }
    }

    /// Creates a table from externally computed entries.
    ///
    /// It is the caller's responsibility to ensure that every valid neighbor index is less than `entries.len()`.
    #[must_use]
    pub const fn from_entries(entries: Vec<[Neighbor; NEIGHBOR_COUNT]>) -> Self {
        Self { entries }
    }

    /// Returns the number of grid points in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the neighbor descriptors of the point at `index`.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[Neighbor; NEIGHBOR_COUNT] {
        &self.entries[index]
    }

    /// Returns the descriptor in the given slot of the point at `index`.
    #[must_use]
    pub fn neighbor(&self, index: usize, slot: NeighborSlot) -> Neighbor {
        self.entries[index][slot.position()]
    }

    /// Returns `0.0` if the point at `index` is missing any bending neighbor and `1.0` otherwise.
    #[must_use]
    pub fn not_edge_flag(&self, index: usize) -> f32 {
        NeighborSlot::BENDS
            .iter()
            .map(|&slot| self.neighbor(index, slot).flag())
            .product()
    }

    /// Whether the point at `index` is an edge point, i.e. is missing any bending neighbor.
    #[must_use]
    pub fn is_edge(&self, index: usize) -> bool {
        NeighborSlot::BENDS.iter().any(|&slot| !self.neighbor(index, slot).is_valid())
    }

    /// Returns the number of edge points.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_edge(i)).count()
    }

    /// Returns the edge mask, `true` for every edge point.
    #[must_use]
    pub fn edge_mask(&self) -> Vec<bool> {
        (0..self.len()).map(|i| self.is_edge(i)).collect()
    }
}
