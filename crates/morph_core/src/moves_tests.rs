use super::*;

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

#[test]
fn test_equality_ignores_weight() {
    let a = Move::with_weight(loc("A2"), loc("C3"), 0);
    let b = Move::with_weight(loc("A2"), loc("C3"), 2);
    assert_eq!(a, b);
    assert_ne!(a, Move::new(loc("A2"), loc("C4")));
}

#[test]
fn test_reversed() {
    let mv = Move::new(loc("B3"), loc("C2"));
    assert_eq!(mv.reversed(), Move::new(loc("C2"), loc("B3")));
}

#[test]
fn test_parse_and_display() {
    let mv: Move = "A2C3".parse().unwrap();
    assert_eq!(mv.from, Location::new(1, 0));
    assert_eq!(mv.to, Location::new(2, 2));
    assert_eq!(mv.to_string(), "A2C3");
    assert!("A2C".parse::<Move>().is_err());
    assert!("A2Z3".parse::<Move>().is_err());
    assert!("Won".parse::<Move>().is_err());
}

#[test]
fn test_flipped_string() {
    let mv = Move::new(Location::new(7, 5), Location::new(0, 0));
    assert_eq!(mv.to_string(), "F8A1");
    assert_eq!(mv.to_flipped_string(), "A1F8");
    assert_eq!(mv.flipped().flipped(), mv);
}

#[test]
fn test_sort_by_weight_is_stable() {
    let mut moves: Moves = [
        Move::with_weight(loc("A1"), loc("A2"), 2),
        Move::with_weight(loc("B1"), loc("B2"), 1),
        Move::with_weight(loc("C1"), loc("C2"), 2),
        Move::with_weight(loc("D1"), loc("D2"), 0),
    ]
    .into_iter()
    .collect();
    moves.sort_by_weight();
    let order: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    assert_eq!(order, vec!["D1D2", "B1B2", "A1A2", "C1C2"]);
}

#[test]
fn test_contains_is_structural() {
    let moves: Moves = [Move::with_weight(loc("A1"), loc("A2"), 1)]
        .into_iter()
        .collect();
    assert!(moves.contains(&Move::new(loc("A1"), loc("A2"))));
    assert!(!moves.contains(&Move::new(loc("A2"), loc("A1"))));
}

#[test]
fn test_extend_and_borrowed_iteration() {
    let mut moves: Moves = [Move::with_weight(loc("A1"), loc("A2"), 2)]
        .into_iter()
        .collect();
    moves.extend([
        Move::with_weight(loc("B1"), loc("B2"), 1),
        Move::with_weight(loc("C1"), loc("C2"), 0),
    ]);
    let more: Moves = [Move::new(loc("D1"), loc("D2"))].into_iter().collect();
    moves.extend(more);

    let mut seen = Vec::new();
    for &mv in &moves {
        seen.push(mv.to_string());
    }
    assert_eq!(seen, ["A1A2", "B1B2", "C1C2", "D1D2"]);
    assert_eq!(moves.into_iter().count(), 4);
}
