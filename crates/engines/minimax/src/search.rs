//! Parallel negamax search with alpha-beta pruning.
//!
//! The top `parallel_plies` plies fan out one scoped thread per child, each
//! on its own copy of the board. Below that the search runs on a single
//! board, making and retracting moves in place. A parallel node publishes its
//! alpha in an atomic that its children read live as their beta, so a good
//! result from one branch narrows the window of branches still running.

use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::thread;

use crossbeam_channel::{after, bounded, select, unbounded};
use morph_core::{Board, Move, Moves, Player, SearchLimits, TimeControl};
use tracing::{debug, info};

use crate::cancel::CancelToken;
use crate::eval::{BEST, MAX_PLY, evaluate, is_forced, loss_score};

/// State shared by every branch of one search.
struct Ctx<'a> {
    time: &'a TimeControl,
    nodes: &'a AtomicU64,
    parallel_plies: u8,
}

impl Ctx<'_> {
    /// Counts a node and reads the clock every few thousand nodes, in case
    /// the watchdog thread has not been scheduled.
    #[inline]
    fn visit(&self) {
        let n = self.nodes.fetch_add(1, Ordering::Relaxed) + 1;
        if self.time.should_check_time(n) {
            self.time.check_time();
        }
    }
}

/// Upper bound of a node's window.
#[derive(Clone, Copy)]
enum Beta<'a> {
    Fixed(i32),
    /// `slack - alpha` of a parallel parent, re-read on every check.
    Live {
        parent_alpha: &'a AtomicI32,
        slack: i32,
    },
}

impl Beta<'_> {
    #[inline]
    fn get(self) -> i32 {
        match self {
            Beta::Fixed(beta) => beta,
            Beta::Live {
                parent_alpha,
                slack,
            } => slack - parent_alpha.load(Ordering::Acquire),
        }
    }
}

/// Scores of the root moves after one iteration.
#[derive(Debug, Clone)]
struct RootOutcome {
    /// Score per root move, in the order the moves were given. `None` for
    /// moves whose subtree did not finish.
    scores: Vec<Option<i32>>,
    /// True if any branch was cut short by the deadline.
    interrupted: bool,
}

impl RootOutcome {
    /// Highest score, ties going to the earliest move.
    fn best(&self) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;
        for (i, score) in self.scores.iter().enumerate() {
            if let Some(score) = *score
                && best.is_none_or(|(_, b)| score > b)
            {
                best = Some((i, score));
            }
        }
        best
    }
}

/// Best move chosen by [`find_best_move`].
#[derive(Debug, Clone, Copy)]
pub struct Pick {
    pub mv: Move,
    pub score: i32,
    pub depth: u8,
    /// The move came from an iteration cut short by the deadline, or from
    /// the fallback when no iteration produced a score.
    pub interrupted: bool,
}

/// Result of a whole search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// None only when `player` has no legal move.
    pub pick: Option<Pick>,
    pub nodes: u64,
}

/// Iterative deepening over the root search.
///
/// Starts at `limits.depth` and, while a move time is set and not used up,
/// searches one ply deeper until `limits.max_depth` or a forced result. A
/// deeper iteration replaces the current pick only if it completed with a
/// higher score. A partial iteration is used only when none completed, and
/// the first ordered move stands in when nothing produced a score.
pub fn find_best_move(
    board: &Board,
    player: Player,
    limits: &SearchLimits,
    parallel_plies: u8,
) -> SearchOutcome {
    limits.start();
    let nodes = AtomicU64::new(0);

    let mut moves = board.legal_moves(player);
    if moves.is_empty() {
        return SearchOutcome { pick: None, nodes: 0 };
    }
    moves.sort_by_weight();

    let ctx = Ctx {
        time: &limits.time_control,
        nodes: &nodes,
        parallel_plies,
    };
    let max_depth = limits.max_depth.clamp(1, MAX_PLY - 1);
    let mut depth = limits.depth.clamp(1, max_depth);

    let (done_tx, done_rx) = bounded::<()>(0);
    let pick = thread::scope(|s| {
        if let Some(remaining) = limits.time_control.remaining() {
            let time = &limits.time_control;
            s.spawn(move || {
                select! {
                    recv(done_rx) -> _ => {}
                    recv(after(remaining)) -> _ => {
                        debug!(?remaining, "move time expired");
                        time.stop();
                    }
                }
            });
        }

        let mut completed: Option<Pick> = None;
        let mut partial: Option<Pick> = None;
        loop {
            let root = CancelToken::root(&limits.time_control);
            let outcome = search_root(&ctx, board, player, depth, &moves, &root);
            let best = outcome.best().map(|(i, score)| Pick {
                mv: moves[i],
                score,
                depth,
                interrupted: outcome.interrupted,
            });

            if outcome.interrupted {
                if completed.is_none() && partial.is_none() {
                    partial = best;
                }
                debug!(depth, "iteration interrupted");
                break;
            }

            if let Some(best) = best {
                info!(
                    depth,
                    score = best.score,
                    mv = %best.mv,
                    nodes = nodes.load(Ordering::Relaxed),
                    "iteration complete"
                );
                if completed.is_none_or(|c| best.score > c.score) {
                    completed = Some(best);
                }
            }

            let forced = completed.is_some_and(|c| is_forced(c.score));
            if forced
                || depth >= max_depth
                || limits.move_time.is_none()
                || limits.should_stop()
            {
                break;
            }
            depth += 1;
        }
        drop(done_tx);

        completed.or(partial).unwrap_or(Pick {
            mv: moves[0],
            score: 0,
            depth: 0,
            interrupted: true,
        })
    });

    SearchOutcome {
        pick: Some(pick),
        nodes: nodes.load(Ordering::Relaxed),
    }
}

/// Searches every root move to `depth` plies and reports each move's score.
///
/// Children get a window one point below the root's best: a move that does
/// not tie the best always scores strictly below it.
fn search_root(
    ctx: &Ctx<'_>,
    board: &Board,
    side: Player,
    depth: u8,
    moves: &Moves,
    cancel: &CancelToken<'_>,
) -> RootOutcome {
    ctx.visit();
    let root_alpha = AtomicI32::new(-BEST);
    let beta = Beta::Live {
        parent_alpha: &root_alpha,
        slack: 1,
    };
    let mut scores = vec![None; moves.len()];
    let mut interrupted = false;

    if ctx.parallel_plies > 0 && depth > 1 {
        let (tx, rx) = unbounded();
        thread::scope(|s| {
            for (i, &mv) in moves.iter().enumerate() {
                let tx = tx.clone();
                let mut child = *board;
                child.make_move_and_get_taken_piece(mv);
                s.spawn(move || {
                    let result = negamax(
                        ctx,
                        &mut child,
                        side.opponent(),
                        1,
                        depth - 1,
                        -BEST,
                        beta,
                        moves.len(),
                        cancel,
                    );
                    let _ = tx.send((i, result));
                });
            }
            drop(tx);

            for (i, (score, child_interrupted)) in rx.iter() {
                if child_interrupted {
                    interrupted = true;
                    continue;
                }
                let score = -score;
                root_alpha.fetch_max(score, Ordering::AcqRel);
                scores[i] = Some(score);
            }
        });
    } else {
        let mut board = *board;
        for (i, &mv) in moves.iter().enumerate() {
            let (score, child_interrupted) = {
                let mut child = board.apply(mv);
                negamax(
                    ctx,
                    &mut child,
                    side.opponent(),
                    1,
                    depth - 1,
                    -BEST,
                    beta,
                    moves.len(),
                    cancel,
                )
            };
            if child_interrupted {
                interrupted = true;
                break;
            }
            let score = -score;
            root_alpha.fetch_max(score, Ordering::AcqRel);
            scores[i] = Some(score);
        }
    }

    RootOutcome {
        scores,
        interrupted,
    }
}

/// Fail-soft negamax. Returns the score from `side`'s perspective and
/// whether the subtree was cut short, in which case the score is only the
/// best seen so far and callers discard it.
#[allow(clippy::too_many_arguments)]
fn negamax(
    ctx: &Ctx<'_>,
    board: &mut Board,
    side: Player,
    ply: u8,
    depth: u8,
    mut alpha: i32,
    beta: Beta<'_>,
    parent_moves: usize,
    cancel: &CancelToken<'_>,
) -> (i32, bool) {
    ctx.visit();
    if cancel.should_stop() {
        return (-BEST, true);
    }

    let mut moves = board.legal_moves(side);
    if board.is_game_over_for(side, &moves) {
        return (loss_score(ply), false);
    }
    if depth == 0 {
        return (evaluate(board, side, moves.len(), parent_moves), false);
    }
    moves.sort_by_weight();

    if ply < ctx.parallel_plies && depth > 1 {
        return parallel_node(ctx, board, side, ply, depth, alpha, beta, &moves, cancel);
    }

    let mut best = -BEST;
    for &mv in &moves {
        let (score, interrupted) = {
            let mut child = board.apply(mv);
            negamax(
                ctx,
                &mut child,
                side.opponent(),
                ply + 1,
                depth - 1,
                -beta.get(),
                Beta::Fixed(-alpha),
                moves.len(),
                cancel,
            )
        };
        if interrupted {
            return (best, true);
        }

        let score = -score;
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta.get() {
            break;
        }
        if cancel.should_stop() {
            return (best, true);
        }
    }

    (best, false)
}

/// Searches each child on its own thread and consumes results as they
/// arrive. On a cutoff the remaining children are cancelled.
#[allow(clippy::too_many_arguments)]
fn parallel_node(
    ctx: &Ctx<'_>,
    board: &Board,
    side: Player,
    ply: u8,
    depth: u8,
    alpha: i32,
    beta: Beta<'_>,
    moves: &Moves,
    cancel: &CancelToken<'_>,
) -> (i32, bool) {
    let node_alpha = AtomicI32::new(alpha);
    let token = CancelToken::child(cancel);
    let child_beta = Beta::Live {
        parent_alpha: &node_alpha,
        slack: 0,
    };
    let child_alpha = -beta.get();
    let (tx, rx) = unbounded();

    thread::scope(|s| {
        for &mv in moves.iter() {
            let tx = tx.clone();
            let token = &token;
            let mut child = *board;
            child.make_move_and_get_taken_piece(mv);
            s.spawn(move || {
                let result = negamax(
                    ctx,
                    &mut child,
                    side.opponent(),
                    ply + 1,
                    depth - 1,
                    child_alpha,
                    child_beta,
                    moves.len(),
                    token,
                );
                if !token.is_cancelled() {
                    let _ = tx.send(result);
                }
            });
        }
        drop(tx);

        let mut best = -BEST;
        let mut interrupted = false;
        for (score, child_interrupted) in rx.iter() {
            if child_interrupted {
                interrupted = true;
                token.cancel();
                break;
            }
            let score = -score;
            if score > best {
                best = score;
                node_alpha.fetch_max(best, Ordering::AcqRel);
            }
            if best >= beta.get() {
                debug!(ply, depth, score = best, "cutoff, cancelling siblings");
                token.cancel();
                return (best, false);
            }
        }

        if !interrupted && cancel.should_stop() {
            interrupted = true;
        }
        (best, interrupted)
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
