use super::*;

pub(crate) fn board(rows: [&str; 8]) -> Board {
    let mut text = String::new();
    for (i, row) in rows.iter().enumerate() {
        text.push_str(&format!("{}   {}\n", 8 - i, row));
    }
    text.push_str("\n    A B C D E F");
    Board::parse(&text).unwrap()
}

pub(crate) fn game_on(rows: [&str; 8]) -> Game {
    Game::new(MinimaxEngine::new(), 2, None).with_board(board(rows))
}

/// North's bishop on C2 can take South's king on D1.
pub(crate) const ENGINE_CAPTURES: [&str; 8] = [
    "R - - - - K",
    "- - - - - -",
    "- - - - - -",
    "- - - - - -",
    "- - - - - -",
    "- - - - - -",
    "- - B - - -",
    "- r - k - -",
];

/// South's rook on D1 can run up the D column onto North's king.
pub(crate) const OPPONENT_CAPTURES: [&str; 8] = [
    "R - - K - -",
    "- - - - - -",
    "- - - - - -",
    "- - - - - -",
    "- - - - - -",
    "- - - - - -",
    "- - - - - -",
    "- - - r - k",
];

#[test]
fn test_new_game_is_not_over() {
    let game = Game::new(MinimaxEngine::new(), 1, None);
    assert_eq!(game.board(), &Board::new_default());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_engine_takes_the_king() {
    let mut game = game_on(ENGINE_CAPTURES);
    let (mv, description) = game.engine_move().unwrap();
    assert_eq!(mv.to_string(), "C2D1");
    assert_eq!(description, "North made move C2D1 (D7C8) and captured piece k");
    assert_eq!(game.winner(), Some(ENGINE_SIDE));
}

#[test]
fn test_opponent_move_is_validated() {
    let mut game = game_on(OPPONENT_CAPTURES);
    assert!(game.opponent_move("D1").is_err());
    assert!(game.opponent_move("A1A2").is_err());
    assert!(game.opponent_move("D1D9").is_err());

    let mv = game.opponent_move("D1D8").unwrap();
    assert_eq!(mv.to_string(), "D1D8");
    assert_eq!(game.winner(), Some(OPPONENT_SIDE));
}

#[test]
fn test_engine_side_is_checked_first() {
    // Neither king is on the board.
    let game = game_on([
        "R - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "r - - - - -",
    ]);
    assert_eq!(game.winner(), Some(OPPONENT_SIDE));
}
