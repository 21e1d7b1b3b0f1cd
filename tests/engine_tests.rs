use minesweeper::config::{Difficulty, GameConfig, MAX_SIDE};
use minesweeper::engine::{generate, Coord, GameSession, Grid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn brute_force_count(grid: &Grid, pos: Coord) -> usize {
    let side = grid.side() as isize;
    let mut adj = 0;
    for dr in -1..=1isize {
        for dc in -1..=1isize {
            if dr == 0 && dc == 0 { continue; }
            let r = pos.row as isize + dr;
            let c = pos.col as isize + dc;
            if r >= 0 && c >= 0 && r < side && c < side && grid.get(Coord::new(r as usize, c as usize)).unwrap().is_mine() {
                adj += 1;
            }
        }
    }
    adj
}

#[test]
fn generated_board_has_exact_mine_count() {
    for d in Difficulty::ALL {
        let config = d.config();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = generate(&config, &mut rng);
        assert_eq!(grid.side(), config.side());
        assert_eq!(grid.mine_count(), config.mines());
        assert_eq!(grid.hidden_count(), config.cells());
        assert!(grid.tiles().all(|(_, t)| !t.is_flagged() && !t.is_visible()));
    }
}

#[test]
fn adjacency_matches_neighbor_mines() {
    let config = GameConfig::new(8, 20).expect("config");
    let mut rng = ChaCha8Rng::seed_from_u64(999);
    let grid = generate(&config, &mut rng);
    for (pos, tile) in grid.tiles() {
        if tile.is_mine() { continue; }
        assert_eq!(tile.mines_around() as usize, brute_force_count(&grid, pos), "adjacency mismatch at {:?}", pos);
    }
}

#[test]
fn nearly_full_board_still_generates() {
    let config = GameConfig::new(3, 8).expect("config");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let grid = generate(&config, &mut rng);
    assert_eq!(grid.mine_count(), 8);
    let (_, safe) = grid.tiles().find(|(_, t)| !t.is_mine()).expect("one safe tile");
    assert!(safe.mines_around() >= 3);
}

#[test]
fn same_seed_same_board() {
    let config = Difficulty::Normal.config();
    let a = GameSession::new(config, 12345);
    let b = GameSession::new(config, 12345);
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.seed(), Some(12345));
}

#[test]
fn zero_seed_draws_a_fresh_one() {
    let session = GameSession::new(Difficulty::Easy.config(), 0);
    assert!(matches!(session.seed(), Some(s) if s != 0));
}

#[test]
fn corner_and_edge_neighbors_do_not_wrap() {
    let grid = Grid::empty(4);
    let mut corner: Vec<_> = grid.neighbors(Coord::new(0, 0)).collect();
    corner.sort();
    assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);
    assert_eq!(grid.neighbors(Coord::new(3, 2)).count(), 5);
    assert_eq!(grid.neighbors(Coord::new(1, 2)).count(), 8);
    assert!(grid.neighbors(Coord::new(3, 3)).all(|n| grid.contains(n)));
}

#[test]
fn with_mines_computes_adjacency() {
    let grid = Grid::with_mines(3, &[Coord::new(0, 0), Coord::new(2, 2), Coord::new(9, 9)]);
    assert_eq!(grid.mine_count(), 2);
    let count = |r, c| grid.get(Coord::new(r, c)).unwrap().mines_around();
    assert_eq!(count(1, 1), 2);
    assert_eq!(count(0, 1), 1);
    assert_eq!(count(0, 2), 0);
    assert_eq!(count(2, 0), 0);
    assert_eq!(count(0, 0), 0);
}

#[test]
fn config_rejects_bad_mine_counts() {
    use minesweeper::error::ConfigError;
    assert_eq!(GameConfig::new(0, 1), Err(ConfigError::ZeroSize));
    assert_eq!(GameConfig::new(4, 0), Err(ConfigError::MineCount { mines: 0, cells: 16 }));
    assert_eq!(GameConfig::new(4, 16), Err(ConfigError::MineCount { mines: 16, cells: 16 }));
    assert!(GameConfig::new(4, 15).is_ok());
    assert_eq!(GameConfig::resolve(None, Some(5), None), Err(ConfigError::IncompleteCustom));
    assert_eq!(GameConfig::resolve(Some(Difficulty::Hard), None, None), Ok(Some(Difficulty::Hard.config())));
    assert_eq!(GameConfig::resolve(None, None, None), Ok(None));
    assert_eq!(GameConfig::resolve(Some(Difficulty::Easy), Some(5), Some(3)).unwrap().unwrap().side(), 5);
    assert_eq!(GameConfig::new(1 << 20, 1), Err(ConfigError::TooLarge { side: 1 << 20, max: MAX_SIDE }));
    assert_eq!(GameConfig::new(usize::MAX, 1), Err(ConfigError::TooLarge { side: usize::MAX, max: MAX_SIDE }));
    assert_eq!(GameConfig::new(MAX_SIDE, 1).map(|c| c.cells()), Ok(MAX_SIDE * MAX_SIDE));
}

#[test]
fn custom_size_option_is_capped() {
    use minesweeper::error::ConfigError;
    let err = GameConfig::resolve(None, Some(MAX_SIDE + 1), Some(10)).unwrap_err();
    assert_eq!(err, ConfigError::TooLarge { side: 100, max: 99 });
    assert_eq!(err.to_string(), "board side size 100 is larger than the maximum of 99");
    let config = GameConfig::resolve(None, Some(MAX_SIDE), Some(10)).unwrap().expect("custom config");
    assert_eq!(GameSession::new(config, 3).grid().side(), MAX_SIDE);
}

#[test]
fn difficulty_presets() {
    let c = |d: Difficulty| (d.config().side(), d.config().mines());
    assert_eq!(c(Difficulty::Easy), (10, 7));
    assert_eq!(c(Difficulty::Normal), (20, 20));
    assert_eq!(c(Difficulty::Hard), (30, 40));
    assert_eq!(" Normal ".parse::<Difficulty>(), Ok(Difficulty::Normal));
    assert!("impossible".parse::<Difficulty>().is_err());
}
