use super::*;
use std::thread;

#[test]
fn test_cancel_is_one_shot() {
    let tc = TimeControl::new(None);
    let token = CancelToken::root(&tc);
    assert!(!token.is_cancelled());
    token.cancel();
    assert!(token.is_cancelled());
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_parent_cancel_reaches_descendants_only() {
    let tc = TimeControl::new(None);
    let root = CancelToken::root(&tc);
    let child = CancelToken::child(&root);
    let grandchild = CancelToken::child(&child);
    let sibling = CancelToken::child(&root);

    child.cancel();
    assert!(grandchild.is_cancelled());
    assert!(child.is_cancelled());
    assert!(!root.is_cancelled());
    assert!(!sibling.is_cancelled());
}

#[test]
fn test_deadline_stops_without_cancelling() {
    let tc = TimeControl::new(None);
    let root = CancelToken::root(&tc);
    let child = CancelToken::child(&root);
    assert!(!child.should_stop());

    tc.stop();
    assert!(child.should_stop());
    assert!(!child.is_cancelled());
}

#[test]
fn test_cancel_visible_across_threads() {
    let tc = TimeControl::new(None);
    let root = CancelToken::root(&tc);
    let child = CancelToken::child(&root);
    thread::scope(|s| {
        s.spawn(|| root.cancel());
    });
    assert!(child.should_stop());
}
