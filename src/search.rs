//! Depth-limited negamax search with alpha-beta pruning

use log::{debug, error, info, warn};

use std::time::Instant;

use crate::bitboard::{BitBoard, Player};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::{eval, lines, HEIGHT, WIDTH};

/// Score of a win found at the root. Wins further down the tree score
/// one less per ply
pub const WINNING_SCORE: i32 = 10_000;

/// Bound that no position score can reach
pub const INFINITY: i32 = WINNING_SCORE + 1;

/// Score of a decided position `depth` plies below the root
///
/// Strictly decreasing in `depth` up to the last ply of a game, so the
/// engine prefers faster wins and slower losses. Never changes sign.
pub fn terminal_score(depth: usize) -> i32 {
    WINNING_SCORE - depth.min(WIDTH * HEIGHT) as i32
}

/// The column picked by [`Searcher::choose_move`] and its score for the engine
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BestMove {
    pub column: usize,
    pub score: i32,
}

/// An agent choosing moves for one side of a game
///
/// # Position Scoring
/// Scores are relative to the side to move. A position where the side
/// to move already holds four in a row scores `WINNING_SCORE - depth`, one
/// where the other side does scores the negation. Full boards score 0 and
/// positions at the depth limit are scored by the [evaluator](crate::eval).
#[derive(Clone, Debug)]
pub struct Searcher {
    config: EngineConfig,
    order: [usize; WIDTH],

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: u64,
    started: Option<Instant>,
    exhausted: bool,
}

impl Searcher {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            order: config.search_order.columns(),
            node_count: 0,
            started: None,
            exhausted: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the last search stopped early because of the node or time limit
    pub fn budget_exhausted(&self) -> bool {
        self.exhausted
    }

    fn begin(&mut self) {
        self.node_count = 0;
        self.exhausted = false;
        self.started = Some(Instant::now());
    }

    fn out_of_budget(&mut self) -> bool {
        if self.exhausted {
            return true;
        }
        let nodes_spent = self
            .config
            .node_limit
            .map_or(false, |limit| self.node_count >= limit);
        let time_spent = match (self.config.time_limit, self.started) {
            (Some(limit), Some(started)) => started.elapsed() >= limit,
            _ => false,
        };
        if nodes_spent || time_spent {
            warn!(
                "search budget exhausted after {} nodes, returning best score so far",
                self.node_count
            );
            self.exhausted = true;
        }
        self.exhausted
    }

    /// Scores `board` for `to_move` as if it were `depth` plies below the root
    ///
    /// `board` is validated first and is left untouched. `depth` may not lie
    /// beyond the configured horizon.
    pub fn search(
        &mut self,
        board: &BitBoard,
        to_move: Player,
        depth: usize,
        alpha: i32,
        beta: i32,
    ) -> Result<i32> {
        board.validate()?;
        if alpha > beta {
            return Err(EngineError::InvariantViolation(format!(
                "empty search window [{}, {}]",
                alpha, beta
            )));
        }
        if depth > self.config.max_depth {
            return Err(EngineError::InvariantViolation(format!(
                "search depth {} is beyond the horizon {}",
                depth, self.config.max_depth
            )));
        }
        self.begin();
        let mut board = *board;
        Ok(self.negamax(&mut board, depth, alpha, beta, to_move))
    }

    /// Performs game tree search
    ///
    /// Every move played on `board` is taken back before returning.
    fn negamax(
        &mut self,
        board: &mut BitBoard,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        to_move: Player,
    ) -> i32 {
        debug_assert!(alpha <= beta);
        self.node_count += 1;

        let mover = board.stones(to_move);
        let opponent = board.stones(to_move.other());

        // a win for either side ends the game before anything else is checked
        if lines::has_four(mover) {
            return terminal_score(depth);
        }
        if lines::has_four(opponent) {
            return -terminal_score(depth);
        }

        if depth >= self.config.max_depth {
            return eval::score(mover, opponent);
        }

        if lines::is_full(mover | opponent) {
            return 0;
        }

        let order = self.order;
        let mut best = -INFINITY;
        let mut explored = false;
        for &column in order.iter() {
            if explored && self.out_of_budget() {
                break;
            }
            let move_bit = match board.try_drop(column, to_move) {
                Ok(move_bit) => move_bit,
                // full columns are skipped
                Err(EngineError::ColumnFull { .. }) => continue,
                Err(err) => {
                    error!("unexpected drop failure in column {}: {}", column + 1, err);
                    debug_assert!(false, "unexpected drop failure: {}", err);
                    continue;
                }
            };
            // the search window is flipped for the other player
            let score = -self.negamax(board, depth + 1, -beta, -alpha, to_move.other());
            board.undo(to_move, move_bit);
            explored = true;

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            // the opponent will not allow this line, stop looking
            if alpha >= beta {
                break;
            }
        }

        if !explored {
            error!(
                "no playable column on a board that is not full: {:?}",
                board
            );
            debug_assert!(explored, "no playable column on a board that is not full");
            return 0;
        }
        best
    }

    /// Picks the best column for the configured `ai_role`
    ///
    /// Columns are tried in the configured order and the first one with the
    /// strictly highest score wins. `board` is not modified.
    pub fn choose_move(&mut self, board: &BitBoard) -> Result<BestMove> {
        board.validate()?;
        self.begin();

        let mut board = *board;
        let to_move = self.config.ai_role;
        let order = self.order;
        let mut alpha = -INFINITY;
        let beta = INFINITY;

        let mut best: Option<BestMove> = None;
        for &column in order.iter() {
            if best.is_some() && self.out_of_budget() {
                break;
            }
            let move_bit = match board.try_drop(column, to_move) {
                Ok(move_bit) => move_bit,
                Err(EngineError::ColumnFull { .. }) => continue,
                Err(err) => return Err(err),
            };
            let score = -self.negamax(&mut board, 1, -beta, -alpha, to_move.other());
            board.undo(to_move, move_bit);
            debug!("column {}: score {}", column + 1, score);

            if best.map_or(true, |best| score > best.score) {
                best = Some(BestMove { column, score });
            }
            if score > alpha {
                alpha = score;
            }
        }

        match best {
            Some(best) => {
                info!(
                    "{} plays column {} (score {}, {} nodes)",
                    to_move,
                    best.column + 1,
                    best.score,
                    self.node_count
                );
                Ok(best)
            }
            None => Err(EngineError::NoLegalMove),
        }
    }
}
