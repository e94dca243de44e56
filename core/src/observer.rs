use crate::*;

/// Receives notifications about what the game state does. Every method
/// defaults to a no-op, so implementors only override what they care about.
///
/// Observers are notified after state has been updated and cannot influence
/// the outcome of a move.
pub trait GameObserver {
    fn mines_placed(&mut self, _grid: Grid, _placed: CellCount, _target: CellCount) {}

    fn move_rejected(&mut self, _direction: Direction, _grid: Grid, _position: Point) {}

    fn moved(&mut self, _direction: Direction, _position: Point, _lives: u8, _moves: CellCount) {}

    fn mine_hit(&mut self, _position: Point, _lives: u8) {}

    fn won(&mut self, _moves: CellCount, _lives: u8) {}

    fn lost(&mut self, _moves: CellCount) {}
}

impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn mines_placed(&mut self, grid: Grid, placed: CellCount, target: CellCount) {
        (**self).mines_placed(grid, placed, target)
    }

    fn move_rejected(&mut self, direction: Direction, grid: Grid, position: Point) {
        (**self).move_rejected(direction, grid, position)
    }

    fn moved(&mut self, direction: Direction, position: Point, lives: u8, moves: CellCount) {
        (**self).moved(direction, position, lives, moves)
    }

    fn mine_hit(&mut self, position: Point, lives: u8) {
        (**self).mine_hit(position, lives)
    }

    fn won(&mut self, moves: CellCount, lives: u8) {
        (**self).won(moves, lives)
    }

    fn lost(&mut self, moves: CellCount) {
        (**self).lost(moves)
    }
}

/// Forwards game events to the `log` facade.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn mines_placed(&mut self, grid: Grid, placed: CellCount, target: CellCount) {
        log::info!("Placed {placed} mines on a {grid} grid (target {target})");
    }

    fn move_rejected(&mut self, direction: Direction, grid: Grid, position: Point) {
        log::warn!(
            "Cannot move {direction} off the grid ({grid}), current position {position}"
        );
    }

    fn moved(&mut self, direction: Direction, position: Point, lives: u8, moves: CellCount) {
        log::info!("Pressed {direction}, position {position}, lives {lives}, moves {moves}");
    }

    fn mine_hit(&mut self, position: Point, lives: u8) {
        if lives == 0 {
            log::info!("Hit a mine at {position}, no lives left");
        } else {
            log::info!("Hit a mine at {position}, {lives} lives remaining");
        }
    }

    fn won(&mut self, moves: CellCount, lives: u8) {
        log::info!("You won in {moves} moves with {lives} lives left!");
    }

    fn lost(&mut self, moves: CellCount) {
        log::info!("GAME OVER after {moves} moves");
    }
}
