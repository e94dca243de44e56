use crate::*;

/// State of a single game session: the grid, where the mines are, where the
/// player stands and how many lives and moves they have used.
///
/// All mutation goes through [`GameState::step`] (or its boolean shorthand
/// [`GameState::move_player`]). Once the game is over every move is rejected
/// and the state stays frozen.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState<O = ()> {
    grid: Grid,
    mines: MineSet,
    player: Point,
    lives: u8,
    moves: CellCount,
    status: GameStatus,
    mine_percentage: u8,
    observer: O,
}

impl GameState {
    pub fn new(config: GameConfig, placer: impl MinePlacer) -> Result<Self> {
        Self::with_observer(config, placer, ())
    }
}

impl<O: GameObserver> GameState<O> {
    pub fn with_observer(
        config: GameConfig,
        placer: impl MinePlacer,
        mut observer: O,
    ) -> Result<Self> {
        config.validate()?;

        let grid = config.grid();
        let mines = placer.place(&config);
        observer.mines_placed(grid, mines.len() as CellCount, config.target_mine_count());

        Ok(Self {
            grid,
            mines,
            player: Point::ORIGIN,
            lives: config.lives,
            moves: 0,
            status: GameStatus::Active,
            mine_percentage: config.mine_percentage,
            observer,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn mine_percentage(&self) -> u8 {
        self.mine_percentage
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_finished()
    }

    pub fn lives_remaining(&self) -> u8 {
        self.lives
    }

    pub fn moves_made(&self) -> CellCount {
        self.moves
    }

    pub fn player_location(&self) -> Point {
        self.player
    }

    pub fn mine_locations(&self) -> &MineSet {
        &self.mines
    }

    /// Direct access to the mine layout, meant for setting up a board before
    /// the first move.
    pub fn mine_locations_mut(&mut self) -> &mut MineSet {
        &mut self.mines
    }

    pub fn has_mine_at(&self, point: Point) -> bool {
        self.mines.contains(&point)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Attempts a move, returning whether it was accepted.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        self.step(direction).is_accepted()
    }

    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_finished() {
            return MoveOutcome::Rejected;
        }

        let grid = self.grid;
        let Some(next) = self.player.step(direction).filter(|&p| grid.contains(p)) else {
            self.observer.move_rejected(direction, grid, self.player);
            return MoveOutcome::Rejected;
        };

        self.player = next;
        // saturates at CellCount::MAX rather than wrapping back to zero
        self.moves = self.moves.saturating_add(1);
        self.evaluate(direction)
    }

    /// Collision is checked before the edge, so a fatal mine on the last
    /// column still loses the game.
    fn evaluate(&mut self, direction: Direction) -> MoveOutcome {
        self.observer.moved(direction, self.player, self.lives, self.moves);

        let mut outcome = MoveOutcome::Moved;
        if self.mines.contains(&self.player) {
            outcome = self.lose_life();
        }

        if self.player.x >= self.grid.columns() && !self.status.is_finished() {
            self.status = GameStatus::Won;
            self.observer.won(self.moves, self.lives);
            outcome = MoveOutcome::Won;
        }

        outcome
    }

    fn lose_life(&mut self) -> MoveOutcome {
        self.lives = self.lives.saturating_sub(1);
        self.observer.mine_hit(self.player, self.lives);

        if self.lives == 0 {
            self.status = GameStatus::Lost;
            self.observer.lost(self.moves);
            MoveOutcome::Lost
        } else {
            MoveOutcome::HitMine
        }
    }
}
