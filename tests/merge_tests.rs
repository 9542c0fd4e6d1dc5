//! Merge-grid tests - slide/merge rules, game over, undo history

use tile_games::core::merge::{is_game_over, resolve};
use tile_games::core::{
    collapse_line, MergeConfig, MergeGame, MergeRecord, MoveSet, SequenceRng, SimpleRng, TileGrid,
};
use tile_games::engine::{MergeSession, Reducer};
use tile_games::types::{Command, Direction, Tile};

fn line(values: &[u32]) -> Vec<Option<u32>> {
    values.iter().map(|&v| if v == 0 { None } else { Some(v) }).collect()
}

fn grid(rows: &[&[u32]]) -> TileGrid {
    TileGrid::from_rows(rows.iter().map(|r| line(r)).collect()).unwrap()
}

#[test]
fn test_four_equal_tiles_merge_pairwise() {
    assert_eq!(collapse_line(&line(&[2, 2, 2, 2])), (line(&[4, 4, 0, 0]), 8));
}

#[test]
fn test_unmergeable_line_is_illegal() {
    let g = grid(&[&[2, 4, 2, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
    let result = resolve(&g, Direction::Left);
    assert!(!result.is_legal);
    assert_eq!(result.grid.row(0), Some(line(&[2, 4, 2, 0]).as_slice()));
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    assert_eq!(collapse_line(&line(&[2, 2, 4, 0])), (line(&[4, 4, 0, 0]), 4));
}

#[test]
fn test_down_scans_from_the_bottom() {
    let g = grid(&[&[2, 0, 0], &[2, 0, 0], &[2, 0, 0]]);
    let down = resolve(&g, Direction::Down);
    assert_eq!(down.grid.get(0, 2), Some(Some(&4)));
    assert_eq!(down.grid.get(0, 1), Some(Some(&2)));
    assert_eq!(down.grid.get(0, 0), Some(None));
    assert_eq!(down.score_delta, 4);
}

#[test]
fn test_full_grid_without_neighbours_is_over() {
    let g = grid(&[&[2, 4, 8], &[4, 8, 2], &[8, 2, 4]]);
    let moves = MoveSet::compute(&g);
    assert!(is_game_over(&g, &moves));
}

#[test]
fn test_grid_with_an_empty_cell_is_never_over() {
    let g = grid(&[&[2, 4, 8], &[4, 8, 2], &[8, 2, 0]]);
    let moves = MoveSet::compute(&g);
    assert!(!is_game_over(&g, &moves));
}

#[test]
fn test_size_one_grid_does_not_crash() {
    let mut game = MergeGame::new(MergeConfig::default().with_size(1), SequenceRng::new(vec![0, 5]));
    assert!(game.game_over());
    for direction in Direction::ALL {
        assert!(!game.apply_move(direction));
    }
    assert_eq!(game.tiles().len(), 1);
}

#[test]
fn test_committed_move_spawns_exactly_one_tile() {
    let record = MergeRecord {
        score: 0,
        best: 0,
        tiles: vec![Tile { x: 3, y: 3, value: 2 }],
    };
    let mut game = MergeGame::from_record(MergeConfig::default(), &record, SimpleRng::new(99)).unwrap();
    let preview = game.moves().get(Direction::Up).grid.clone();
    assert!(game.apply_move(Direction::Up));

    let added: Vec<Tile> = game
        .tiles()
        .into_iter()
        .filter(|t| preview.get(t.x, t.y) == Some(None))
        .collect();
    assert_eq!(added.len(), 1);
    assert!(added[0].value == 2 || added[0].value == 4);
    assert_eq!(game.tiles().len(), 2);
}

#[test]
fn test_score_and_best_accumulate() {
    let record = MergeRecord {
        score: 0,
        best: 2,
        tiles: vec![
            Tile { x: 0, y: 0, value: 4 },
            Tile { x: 1, y: 0, value: 4 },
            Tile { x: 2, y: 0, value: 2 },
            Tile { x: 3, y: 0, value: 2 },
        ],
    };
    let mut game =
        MergeGame::from_record(MergeConfig::default(), &record, SequenceRng::new(vec![0, 5])).unwrap();
    assert!(game.apply_move(Direction::Left));
    assert_eq!(game.score(), 12);
    assert_eq!(game.best(), 12);
}

#[test]
fn test_history_keeps_ten_most_recent_in_order() {
    let mut session = MergeSession::new(MergeConfig::default().with_size(8), SimpleRng::new(2024));
    let mut committed = Vec::new();

    let mut attempt = 0usize;
    while committed.len() < 15 {
        let command = [Command::MoveLeft, Command::MoveUp, Command::MoveRight, Command::MoveDown]
            [attempt % 4];
        attempt += 1;
        if session.apply(command) {
            committed.push(session.game().record());
        }
        assert!(attempt < 1000, "no legal move found");
    }

    assert_eq!(session.history().len(), 10);
    assert_eq!(session.history().to_vec(), committed[5..].to_vec());
}

#[test]
fn test_undo_walks_back_then_stops() {
    let mut session = MergeSession::new(MergeConfig::default().with_size(8), SimpleRng::new(5));
    let start = session.game().record();
    let mut moves = 0;
    for command in [Command::MoveLeft, Command::MoveRight, Command::MoveUp, Command::MoveDown] {
        if session.apply(command) {
            moves += 1;
        }
    }
    for _ in 0..moves {
        assert!(session.apply(Command::Undo));
    }
    assert!(!session.apply(Command::Undo));
    assert_eq!(session.game().record(), start);
}
