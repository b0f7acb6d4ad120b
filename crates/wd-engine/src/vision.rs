//! Fog of war.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// The cells the player has seen on the current floor.
///
/// Only grows while the floor lasts; [`RevealedSet::clear`] is called on a
/// floor transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedSet {
    size: i32,
    cells: Vec<bool>,
    count: usize,
}

impl RevealedSet {
    /// An empty set for a grid of the given side length.
    pub fn new(size: i32) -> Self {
        let side = size.max(0) as usize;
        Self {
            size: size.max(0),
            cells: vec![false; side * side],
            count: 0,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x >= 0 && pos.y >= 0 && pos.x < self.size && pos.y < self.size)
            .then(|| (pos.y * self.size + pos.x) as usize)
    }

    /// Whether a cell has been seen.
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    /// Mark a cell as seen. Returns `true` if it was not seen before.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        if self.cells[i] {
            return false;
        }
        self.cells[i] = true;
        self.count += 1;
        true
    }

    /// Number of seen cells.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Forget everything, resizing for a new grid.
    pub fn clear(&mut self, size: i32) {
        *self = Self::new(size);
    }

    /// Every in-bounds cell within Euclidean `radius` of `center`.
    /// Returns how many cells were newly revealed.
    pub fn reveal_around(&mut self, center: Position, radius: i32) -> usize {
        let r2 = radius * radius;
        let mut added = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let pos = Position::new(center.x + dx, center.y + dy);
                if center.distance_squared(pos) <= r2 && self.insert(pos) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Seen positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, seen)| **seen)
            .map(move |(i, _)| Position::new(i as i32 % size, i as i32 / size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn radius_three_disc_in_open_space() {
        let mut seen = RevealedSet::new(15);
        let added = seen.reveal_around(Position::new(7, 7), 3);
        // Lattice points with dx²+dy² <= 9.
        assert_eq!(added, 29);
        assert!(seen.contains(Position::new(10, 7)));
        assert!(seen.contains(Position::new(9, 9)));
        assert!(!seen.contains(Position::new(10, 8)));
        assert!(!seen.contains(Position::new(10, 10)));
    }

    #[test]
    fn clipped_at_corner() {
        let mut seen = RevealedSet::new(15);
        seen.reveal_around(Position::new(0, 0), 3);
        assert!(seen.iter().all(|p| p.x >= 0 && p.y >= 0));
        // Quarter disc including the axes: 11 cells.
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn idempotent() {
        let mut seen = RevealedSet::new(15);
        seen.reveal_around(Position::new(4, 4), 3);
        let before = seen.clone();
        assert_eq!(seen.reveal_around(Position::new(4, 4), 3), 0);
        assert_eq!(seen, before);
    }

    #[test]
    fn clear_empties() {
        let mut seen = RevealedSet::new(15);
        seen.reveal_around(Position::new(4, 4), 3);
        seen.clear(15);
        assert!(seen.is_empty());
        assert_eq!(seen.iter().count(), 0);
    }

    proptest! {
        #[test]
        fn never_shrinks(path in prop::collection::vec((0i32..15, 0i32..15), 1..30)) {
            let mut seen = RevealedSet::new(15);
            let mut last = 0;
            for (x, y) in path {
                let center = Position::new(x, y);
                seen.reveal_around(center, 3);
                prop_assert!(seen.len() >= last);
                prop_assert!(seen.contains(center));
                last = seen.len();
            }
            prop_assert_eq!(seen.iter().count(), seen.len());
        }
    }
}
