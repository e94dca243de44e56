use super::*;

/// Rolls an independent percentage draw for every cell, in row-major order,
/// from a single seeded RNG.
///
/// The running count is compared with `<=` against the target before each
/// accepted draw, so a layout can end up one mine over the target. It can
/// also land under it when the draws are unlucky; the count is approximate
/// rather than exact.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, config: &GameConfig) -> MineSet {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let target = config.target_mine_count();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines = MineSet::new();

        // x walks rows and y walks columns here, unlike player movement
        for x in 0..config.rows {
            for y in 0..config.columns {
                let roll: u8 = rng.random_range(0..100);
                if roll < config.mine_percentage && (mines.len() as CellCount) <= target {
                    mines.insert(Point::new(x, y));
                }
            }
        }

        let placed = mines.len() as CellCount;
        if placed != target {
            log::debug!(
                "Placed mine count differs from target, actual: {}, target: {}",
                placed,
                target
            );
        }
        mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::default();
        let a = RandomMinePlacer::new(42).place(&config);
        let b = RandomMinePlacer::new(42).place(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_percent_places_nothing() {
        let config = GameConfig::new(16, 16, 0, 3).unwrap();
        for seed in 0..16 {
            assert!(RandomMinePlacer::new(seed).place(&config).is_empty());
        }
    }

    #[test]
    fn count_never_exceeds_target_plus_one() {
        let config = GameConfig::new(4, 5, 100, 3).unwrap();
        let mines = RandomMinePlacer::new(7).place(&config);
        assert_eq!(mines.len() as CellCount, config.target_mine_count());

        let config = GameConfig::new(10, 10, 50, 3).unwrap();
        for seed in 0..32 {
            let mines = RandomMinePlacer::new(seed).place(&config);
            assert!(mines.len() as CellCount <= config.target_mine_count() + 1);
        }
    }

    #[test]
    fn mines_stay_inside_rows_by_columns() {
        let config = GameConfig::new(3, 7, 60, 3).unwrap();
        for seed in 0..32 {
            for mine in RandomMinePlacer::new(seed).place(&config) {
                assert!(mine.x < config.rows, "{mine} outside rows");
                assert!(mine.y < config.columns, "{mine} outside columns");
            }
        }
    }

    #[test]
    fn running_count_check_can_place_one_past_target() {
        let config = GameConfig::new(3, 3, 90, 3).unwrap();
        let target = config.target_mine_count();
        assert_eq!(target, 8);

        let overshoots = (0..200)
            .map(|seed| RandomMinePlacer::new(seed).place(&config).len() as CellCount)
            .filter(|&placed| placed == target + 1)
            .count();
        assert!(overshoots > 0, "no seed placed {} mines", target + 1);
    }
}
