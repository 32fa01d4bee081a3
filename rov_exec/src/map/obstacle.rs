//! # Obstacle detection

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::collections::HashSet;

use crate::loc::Position;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Something which can tell the rover whether a cell is blocked.
///
/// Positions passed to the detector are always normalised into the grid.
pub trait ObstacleDetector {
    fn is_obstacle(&self, position: &Position) -> bool;
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A fixed set of blocked cells, matched exactly.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    cells: HashSet<Position>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ObstacleSet {
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Build from an optional list, `None` giving an empty set.
    pub fn from_option<I>(cells: Option<I>) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        cells.map(Self::new).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the blocked cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}

impl ObstacleDetector for ObstacleSet {
    fn is_obstacle(&self, position: &Position) -> bool {
        self.cells.contains(position)
    }
}

impl<D: ObstacleDetector + ?Sized> ObstacleDetector for &D {
    fn is_obstacle(&self, position: &Position) -> bool {
        (**self).is_obstacle(position)
    }
}

impl<D: ObstacleDetector + ?Sized> ObstacleDetector for Box<D> {
    fn is_obstacle(&self, position: &Position) -> bool {
        (**self).is_obstacle(position)
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
