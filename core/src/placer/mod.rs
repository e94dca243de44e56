use crate::*;
pub use random::*;

mod random;

/// Decides where mines go before the first move is made.
pub trait MinePlacer {
    fn place(self, config: &GameConfig) -> MineSet;
}

/// Places exactly the given mines, ignoring the configured percentage.
///
/// Points outside the grid are kept as-is; they can never be stepped on
/// except for the inclusive bottom and right edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMinePlacer {
    mines: MineSet,
}

impl FixedMinePlacer {
    pub fn new<I>(mines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        Self {
            mines: mines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(self, _config: &GameConfig) -> MineSet {
        self.mines
    }
}
