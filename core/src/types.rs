use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid dimensions and positions.
pub type Coord = u16;

/// Count type used for mine counts, move counts and total-cell counts.
pub type CellCount = u32;

/// Set of mine locations. Duplicate placements collapse into one entry.
pub type MineSet = BTreeSet<Point>;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Playable rectangle, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: Coord,
    columns: Coord,
}

impl Grid {
    pub const fn new(rows: Coord, columns: Coord) -> Self {
        Self { rows, columns }
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    /// Whether the player may stand at `point`.
    ///
    /// The upper bounds are inclusive: a player can step one cell past the
    /// last index on the bottom and right edges. Reaching `x == columns` is
    /// what wins the game.
    pub const fn contains(&self, point: Point) -> bool {
        point.x <= self.columns && point.y <= self.rows
    }
}

/// Two-dimensional location `(x, y)`, with `x` growing rightwards and `y`
/// growing downwards.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Applies one step in `direction`, returning `None` when either axis
    /// would go below zero or overflow.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let (dx, dy) = direction.delta();
        Some(Point {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement `(dx, dy)` for this direction.
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        f.write_str(name)
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl core::fmt::Display for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} X {}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_below_zero_is_none() {
        assert_eq!(Point::ORIGIN.step(Direction::Up), None);
        assert_eq!(Point::ORIGIN.step(Direction::Left), None);
    }

    #[test]
    fn step_changes_exactly_one_axis() {
        let start = Point::new(2, 2);
        for direction in Direction::ALL {
            let next = start.step(direction).unwrap();
            let dx = next.x.abs_diff(start.x);
            let dy = next.y.abs_diff(start.y);
            assert_eq!(dx + dy, 1, "{direction} moved {start} to {next}");
        }
    }

    #[test]
    fn grid_contains_is_inclusive_of_dimensions() {
        let grid = Grid::new(3, 4);
        assert!(grid.contains(Point::new(4, 3)));
        assert!(!grid.contains(Point::new(5, 0)));
        assert!(!grid.contains(Point::new(0, 4)));
    }

    #[test]
    fn total_cells_saturates() {
        assert_eq!(Grid::new(8, 8).total_cells(), 64);
        assert_eq!(
            Grid::new(Coord::MAX, Coord::MAX).total_cells(),
            (Coord::MAX as CellCount) * (Coord::MAX as CellCount)
        );
    }
}
