//! Crate root module declarations for the chess rules engine.
//!
//! The crate models a two-player game of chess: board state, attack
//! detection, move legality, game-status classification and reversible move
//! application, plus a `ChessGame` session that ties them together for a
//! front end. There is no search or evaluation.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod game_status {
    pub mod game_classifier;
    pub mod insufficient_material;
}

pub mod session {
    pub mod chess_game;
    pub mod game_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
