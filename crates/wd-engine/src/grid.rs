//! The cell grid of a floor.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Solid rock.
    #[default]
    Wall,
    /// Walkable ground.
    Floor,
}

/// A square grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid of the given side length filled with walls.
    pub fn filled(size: i32) -> Self {
        let side = size.max(0) as usize;
        Self {
            size: size.max(0),
            cells: vec![Cell::Wall; side * side],
        }
    }

    /// Side length.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether a position lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size && pos.y < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.size + pos.x) as usize)
    }

    /// The cell at a position, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Whether a position is an in-bounds floor cell.
    pub fn is_floor(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Floor)
    }

    /// Set a cell. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// All floor positions in row-major order.
    pub fn floor_cells(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.is_floor(p)).collect()
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}
