//! Move-tree node counting used to verify move generation.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::game_status::game_classifier::in_check;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

/// Leaf statistics for a fixed-depth walk of the move tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts every legal line `depth` plies deep from the side to move.
///
/// Runs in place with apply/undo; `game_state` is back to its starting value
/// when this returns `Ok`.
pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(game_state, depth, &mut total)?;
    Ok(total)
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    let mover = game_state.side_to_move();
    let mut out = Vec::new();

    for (from, to) in all_legal_moves(game_state, mover) {
        apply_move(game_state, from, to)?;
        let below = perft(game_state, depth.saturating_sub(1));
        undo_move(game_state);
        out.push((format!("{from}{to}"), below?.nodes));
    }

    Ok(out)
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    let mover = game_state.side_to_move();

    for (from, to) in all_legal_moves(game_state, mover) {
        let record = apply_move(game_state, from, to)?;

        if depth == 1 {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if record.is_capture() {
                leaf.captures = 1;
            }
            if record.is_en_passant {
                leaf.en_passant = 1;
            }
            if record.is_castle {
                leaf.castles = 1;
            }
            if record.is_promotion {
                leaf.promotions = 1;
            }
            let defender = mover.opposite();
            if in_check(game_state, defender) {
                leaf.checks = 1;
                if !has_any_legal_move(game_state, defender) {
                    leaf.checkmates = 1;
                }
            }
            counts.merge(leaf);
        } else {
            let result = perft_recurse(game_state, depth - 1, counts);
            if result.is_err() {
                undo_move(game_state);
                return result;
            }
        }

        undo_move(game_state);
    }

    Ok(())
}
