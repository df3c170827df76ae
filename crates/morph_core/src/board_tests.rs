use super::*;

const DEFAULT_TEXT: &str = concat!(
    "8   - K - - - -\n",
    "7   N B R R B N\n",
    "6   - - P P - -\n",
    "5   - - - - - -\n",
    "4   - - - - - -\n",
    "3   - - p p - -\n",
    "2   n b r r b n\n",
    "1   - - - - k -\n",
    "\n",
    "    A B C D E F",
);

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

#[test]
fn test_parse_matches_default_board() {
    assert_eq!(Board::parse(DEFAULT_TEXT).unwrap(), Board::new_default());
}

#[test]
fn test_display_matches_layout() {
    assert_eq!(Board::new_default().to_string(), DEFAULT_TEXT);
}

#[test]
fn test_parse_rejects_wrong_row_count() {
    let text = DEFAULT_TEXT.replacen("8   - K - - - -\n", "", 1);
    assert_eq!(Board::parse(&text), Err(MorphError::RowCount { found: 7 }));
}

#[test]
fn test_parse_rejects_wrong_column_count() {
    let text = DEFAULT_TEXT.replacen("5   - - - - - -", "5   - - - - -", 1);
    assert_eq!(
        Board::parse(&text),
        Err(MorphError::ColumnCount { row: 3, found: 5 })
    );
}

#[test]
fn test_parse_rejects_unknown_piece() {
    let text = DEFAULT_TEXT.replacen("5   - - - - - -", "5   - - Q - - -", 1);
    assert_eq!(Board::parse(&text), Err(MorphError::UnknownPiece('Q')));
}

#[test]
fn test_parse_rejects_missing_footer() {
    assert!(DEFAULT_TEXT.ends_with("\n\n    A B C D E F"));
    let text = DEFAULT_TEXT.replacen("    A B C D E F", "", 1);
    assert_ne!(text, DEFAULT_TEXT);
    assert_eq!(Board::parse(&text), Err(MorphError::MissingFooter));
}

#[test]
fn test_canonical_text_round_trip() {
    let board = Board::parse(DEFAULT_TEXT).unwrap();
    assert_eq!(board.to_string(), DEFAULT_TEXT);
    assert_eq!(Board::parse(&board.to_string()).unwrap(), board);
}

#[test]
fn test_piece_at_off_board_is_none() {
    let b = Board::new_default();
    assert_eq!(b.piece_at(Location::new(-1, 0)), None);
    assert_eq!(b.piece_at(Location::new(0, 6)), None);
    assert_eq!(b.piece_at(Location::new(7, 1)), Some(Piece::NorthKing));
}

#[test]
fn test_make_move() {
    let mut before = board([
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - k - -",
    ]);
    let after = board([
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - k - - -",
    ]);
    let taken = before.make_move_and_get_taken_piece(mv("D1C1"));
    assert_eq!(taken, Piece::Empty);
    assert_eq!(before, after);
}

#[test]
fn test_capture_morphs_and_retract_restores() {
    let original = board([
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - R -",
        "- - - - - -",
        "- - b - - -",
        "- - - - k -",
    ]);
    let mut b = original;
    let m = mv("C2E4");
    let taken = b.make_move_and_get_taken_piece(m);
    assert_eq!(taken, Piece::NorthRook);
    assert_eq!(b.piece_at("E4".parse().unwrap()), Some(Piece::SouthKnight));
    assert_eq!(b.piece_at(m.from), Some(Piece::Empty));

    b.retract_move(m, taken);
    assert_eq!(b, original);
}

#[test]
fn test_applied_move_retracts_on_drop() {
    let original = Board::new_default();
    let mut b = original;
    {
        let applied = b.apply(mv("C3C4"));
        assert_eq!(applied.taken(), Piece::Empty);
        assert_eq!(applied.piece_at("C4".parse().unwrap()), Some(Piece::SouthPawn));
    }
    assert_eq!(b, original);
}

#[test]
fn test_nested_applied_moves_unwind_in_order() {
    let original = Board::new_default();
    let mut b = original;
    {
        let mut first = b.apply(mv("C3C4"));
        let second = first.apply(mv("C6C5"));
        assert_eq!(second.count(Piece::Empty), original.count(Piece::Empty));
    }
    assert_eq!(b, original);
}

#[test]
fn test_weighted_score_is_symmetric() {
    let b = board([
        "- K - - - -",
        "- - - - - -",
        "- - P - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "n b r - - -",
        "- - - - k -",
    ]);
    assert_eq!(b.weighted_score_for(Player::South), 18 - 1);
    assert_eq!(
        b.weighted_score_for(Player::North),
        -b.weighted_score_for(Player::South)
    );
    assert_eq!(Board::new_default().weighted_score_for(Player::North), 0);
}

#[test]
fn test_game_over_when_king_missing() {
    let b = board([
        "- - - - - -",
        "- - - - - -",
        "- - P - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - k -",
    ]);
    let north = b.legal_moves(Player::North);
    assert!(!north.is_empty());
    assert!(b.is_game_over_for(Player::North, &north));
    assert!(!b.has_king(Player::North));
}

#[test]
fn test_game_over_when_no_moves() {
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
    // South's king may only step toward column A, which is off the board.
    let south = b.legal_moves(Player::South);
    assert!(south.is_empty());
    assert!(b.is_game_over_for(Player::South, &south));
    // North's king may only step toward column F, which is off the board too.
    let north = b.legal_moves(Player::North);
    assert!(north.is_empty());
}

#[test]
fn test_default_board_not_game_over() {
    let b = Board::new_default();
    for player in [Player::North, Player::South] {
        let moves = b.legal_moves(player);
        assert!(!b.is_game_over_for(player, &moves));
    }
}

#[test]
fn test_is_legal_move() {
    let b = Board::new_default();
    assert!(b.is_legal_move(Player::South, mv("C3C4")));
    assert!(!b.is_legal_move(Player::South, mv("C3C5")));
    assert!(!b.is_legal_move(Player::North, mv("C3C4")));
}

#[test]
fn test_parse_legal_move() {
    let b = Board::new_default();
    let m = b.parse_legal_move(Player::South, "c3c4").unwrap();
    assert_eq!(m, mv("C3C4"));
    assert_eq!(m.weight, Piece::Empty.move_weight());
    assert_eq!(
        b.parse_legal_move(Player::South, "C3C5"),
        Err(MorphError::IllegalMove("C3C5".to_string()))
    );
    assert!(matches!(
        b.parse_legal_move(Player::South, "hello"),
        Err(MorphError::InvalidMove(_))
    ));
}

#[test]
fn test_make_move_and_describe() {
    let mut b = board([
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - - -",
        "- - - - R -",
        "- - - - - -",
        "- - b - - -",
        "- - - - k -",
    ]);
    let line = b.make_move_and_describe(mv("C2E4"));
    assert_eq!(line, "South made move C2E4 (D7B5) and captured piece R");
}
