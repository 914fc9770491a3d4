//! Integration tests for the Hex engine
//!
//! Tests the full stack: topology, win detection under both rules, and
//! complete games driven through `Game`.

use hex_core::{
    board::{Board, Coord, Player},
    build_adjacency, has_won, has_won_with, winning_path, Game, GameConfig, GameResult,
    HexError, WinRule,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn all_cells(size: u8) -> Vec<Coord> {
    (0..size)
        .flat_map(|x| (0..size).map(move |y| Coord::new(x, y)))
        .collect()
}

/// Board with the first `stones` cells of a shuffled order, colors alternating
fn random_board(rng: &mut ChaCha8Rng, size: u8, stones: usize) -> Board {
    let mut cells = all_cells(size);
    cells.shuffle(rng);

    let mut board = Board::new(size).unwrap();
    for (i, &coord) in cells.iter().take(stones).enumerate() {
        let player = if i % 2 == 0 { Player::Red } else { Player::Blue };
        board.place(coord, player).unwrap();
    }
    board
}

// ============================================================================
// SCENARIO TESTS
// ============================================================================

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new(7).unwrap();
    let adj = build_adjacency(7);
    assert!(!has_won(&board, &adj, Player::Red));
    assert!(!has_won(&board, &adj, Player::Blue));
}

#[test]
fn test_blue_diagonal_chain() {
    let mut board = Board::new(7).unwrap();
    for k in 0..7 {
        board.place(Coord::new(k, 6 - k), Player::Blue).unwrap();
    }
    let adj = build_adjacency(7);
    assert!(has_won_with(&board, &adj, Player::Blue, WinRule::Connectivity));
    assert!(has_won_with(&board, &adj, Player::Blue, WinRule::Frontier));
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

#[test]
fn test_full_board_has_exactly_one_winner() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [3u8, 5, 7, 9] {
        let adj = build_adjacency(size);
        for _ in 0..50 {
            let board = random_board(&mut rng, size, size as usize * size as usize);
            assert!(board.is_full());
            let red = has_won(&board, &adj, Player::Red);
            let blue = has_won(&board, &adj, Player::Blue);
            assert!(red != blue, "full {}x{} board: red={} blue={}", size, size, red, blue);
        }
    }
}

#[test]
fn test_frontier_never_overclaims() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let adj = build_adjacency(7);

    for _ in 0..200 {
        let stones = rng.gen_range(0..=30);
        let board = random_board(&mut rng, 7, stones);
        for player in Player::ALL {
            if has_won_with(&board, &adj, player, WinRule::Frontier) {
                assert!(has_won_with(&board, &adj, player, WinRule::Connectivity));
            }
        }
    }
}

#[test]
fn test_winning_path_is_a_real_chain() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let size = 7;
    let adj = build_adjacency(size);

    for _ in 0..100 {
        let stones = rng.gen_range(10..=49);
        let board = random_board(&mut rng, size, stones);

        for player in Player::ALL {
            let path = winning_path(&board, &adj, player);
            assert_eq!(path.is_some(), has_won(&board, &adj, player));

            if let Some(path) = path {
                assert!(player.on_start_edge(path[0]));
                assert!(player.on_end_edge(*path.last().unwrap(), size));
                assert!(path.iter().all(|&c| board.is_owned_by(c, player)));
                for pair in path.windows(2) {
                    assert!(adj.are_adjacent(pair[0], pair[1]));
                }
            }
        }
    }
}

// ============================================================================
// GAME TESTS
// ============================================================================

#[test]
fn test_random_games_end_with_single_winner() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for game_number in 0..30 {
        let first = if game_number % 2 == 0 { Player::Red } else { Player::Blue };
        let mut game = Game::new(GameConfig::with_size(6).with_first_player(first)).unwrap();
        let mut cells = all_cells(6);
        cells.shuffle(&mut rng);

        let mut result = GameResult::Ongoing;
        for coord in cells {
            result = game.play(coord).unwrap();
            if result != GameResult::Ongoing {
                break;
            }
        }

        let winner = result.winner().expect("a filled board always has a winner");
        assert_eq!(game.winner(), Some(winner));
        assert!(has_won(game.board(), game.adjacency(), winner));
        assert!(!has_won(game.board(), game.adjacency(), winner.opponent()));
        assert_eq!(game.play(Coord::new(0, 0)), Err(HexError::GameOver));
    }
}

#[test]
fn test_config_round_trip_through_game() {
    let config = GameConfig::from_json(r#"{ "board_size": 4, "win_rule": "Frontier" }"#).unwrap();
    let mut game = Game::new(config).unwrap();
    assert_eq!(game.config().win_rule, WinRule::Frontier);
    assert_eq!(game.board().size(), 4);

    // Red (first) takes column x = 0, Blue plays along x = 3
    let moves = [(0, 0), (3, 0), (0, 1), (3, 1), (0, 2), (3, 2)];
    for (x, y) in moves {
        assert_eq!(game.play(Coord::new(x, y)).unwrap(), GameResult::Ongoing);
    }
    assert_eq!(game.play(Coord::new(0, 3)).unwrap(), GameResult::RedWins);
}
