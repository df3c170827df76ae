use super::*;
use crate::eval::{WIN, WIN_THRESHOLD};
use std::time::{Duration, Instant};

fn board(rows: [&str; 8]) -> Board {
    let mut text = String::new();
    for (i, row) in rows.iter().enumerate() {
        text.push_str(&format!("{}   {}\n", 8 - i, row));
    }
    text.push_str("\n    A B C D E F");
    Board::parse(&text).unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// North's bishop on C2 can take South's king on D1.
fn king_capture_board() -> Board {
    board([
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - B - - -",
        "- r - k - -",
    ])
}

#[test]
fn test_captures_king_at_every_depth() {
    let b = king_capture_board();
    for depth in 1..=3 {
        for parallel_plies in [0, 2] {
            let outcome = find_best_move(&b, Player::North, &SearchLimits::depth(depth), parallel_plies);
            let pick = outcome.pick.unwrap();
            assert_eq!(pick.mv, mv("C2D1"), "depth {depth}, parallel {parallel_plies}");
            assert_eq!(pick.score, WIN - 1);
            assert!(pick.score >= WIN_THRESHOLD);
            assert!(!pick.interrupted);
        }
    }
}

#[test]
fn test_forced_win_stops_deepening() {
    let b = king_capture_board();
    let limits = SearchLimits::depth_and_time(1, Duration::from_secs(5));
    let start = Instant::now();
    let pick = find_best_move(&b, Player::North, &limits, 2).pick.unwrap();
    assert_eq!(pick.depth, 1);
    assert_eq!(pick.mv, mv("C2D1"));
    assert!(start.elapsed() < Duration::from_secs(4));
}

#[test]
fn test_default_board_returns_legal_move() {
    let b = Board::new_default();
    let outcome = find_best_move(&b, Player::South, &SearchLimits::depth(3), 2);
    let pick = outcome.pick.unwrap();
    assert!(b.is_legal_move(Player::South, pick.mv));
    assert!(!is_forced(pick.score));
    assert_eq!(pick.depth, 3);
    assert!(outcome.nodes > 0);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let b = Board::new_default();
    let reference = find_best_move(&b, Player::North, &SearchLimits::depth(3), 0)
        .pick
        .unwrap();
    for parallel_plies in [1, 2, 3] {
        let pick = find_best_move(&b, Player::North, &SearchLimits::depth(3), parallel_plies)
            .pick
            .unwrap();
        assert_eq!(pick.mv, reference.mv, "parallel {parallel_plies}");
        assert_eq!(pick.score, reference.score, "parallel {parallel_plies}");
    }
}

#[test]
fn test_zero_move_time_still_returns_a_move() {
    let b = Board::new_default();
    let limits = SearchLimits::depth_and_time(6, Duration::ZERO);
    let start = Instant::now();
    let pick = find_best_move(&b, Player::South, &limits, 2).pick.unwrap();
    assert!(b.is_legal_move(Player::South, pick.mv));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_short_move_time_returns_legal_move() {
    let b = Board::new_default();
    let limits = SearchLimits::depth_and_time(1, Duration::from_millis(50));
    let start = Instant::now();
    let pick = find_best_move(&b, Player::North, &limits, 2).pick.unwrap();
    assert!(b.is_legal_move(Player::North, pick.mv));
    assert!(pick.depth >= 1);
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_deepening_respects_max_depth() {
    let b = Board::new_default();
    let limits = SearchLimits::depth_and_time(1, Duration::from_secs(30)).with_max_depth(2);
    let pick = find_best_move(&b, Player::South, &limits, 2).pick.unwrap();
    assert!((1..=2).contains(&pick.depth));
    assert!(!pick.interrupted);
}

#[test]
fn test_no_moves_returns_none() {
    let b = board([
        "- - - - - K",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "k - - - - -",
    ]);
    let outcome = find_best_move(&b, Player::South, &SearchLimits::depth(3), 2);
    assert!(outcome.pick.is_none());
    assert_eq!(outcome.nodes, 0);
}

#[test]
fn test_avoids_losing_the_king() {
    // North's rook on A1 threatens to slide along row 1 onto South's king.
    // Only taking it with the rook on A2 saves the king.
    let b = board([
        "- - - - - K",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "r - - - - -",
        "R - - - k -",
    ]);
    for parallel_plies in [0, 2] {
        let pick = find_best_move(&b, Player::South, &SearchLimits::depth(2), parallel_plies)
            .pick
            .unwrap();
        assert_eq!(pick.mv, mv("A2A1"));
    }
}

#[test]
fn test_root_outcome_prefers_earliest_best() {
    let outcome = RootOutcome {
        scores: vec![Some(3), None, Some(5), Some(5), Some(-2)],
        interrupted: false,
    };
    assert_eq!(outcome.best(), Some((2, 5)));

    let empty = RootOutcome {
        scores: vec![None, None],
        interrupted: true,
    };
    assert_eq!(empty.best(), None);
}

#[test]
fn test_search_root_scores_every_move_when_uninterrupted() {
    let b = Board::new_default();
    let tc = TimeControl::new(None);
    tc.start();
    let nodes = AtomicU64::new(0);
    let ctx = Ctx {
        time: &tc,
        nodes: &nodes,
        parallel_plies: 2,
    };
    let mut moves = b.legal_moves(Player::South);
    moves.sort_by_weight();
    let root = CancelToken::root(&tc);

    let outcome = search_root(&ctx, &b, Player::South, 1, &moves, &root);
    assert!(!outcome.interrupted);
    assert!(outcome.scores.iter().all(Option::is_some));
}

#[test]
fn test_search_root_stops_when_time_is_up() {
    let b = Board::new_default();
    let tc = TimeControl::new(None);
    tc.start();
    tc.stop();
    let nodes = AtomicU64::new(0);
    let ctx = Ctx {
        time: &tc,
        nodes: &nodes,
        parallel_plies: 2,
    };
    let mut moves = b.legal_moves(Player::South);
    moves.sort_by_weight();
    let root = CancelToken::root(&tc);

    let outcome = search_root(&ctx, &b, Player::South, 4, &moves, &root);
    assert!(outcome.interrupted);
    assert!(outcome.scores.iter().all(Option::is_none));
}
