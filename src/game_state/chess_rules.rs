//! Canonical chess-rule constants.
//!
//! Static layout literals used to set up the initial position and to locate
//! the fixed squares that castling depends on.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from the `a` file to the `h` file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of both kings in the initial setup.
pub const KING_START_COL: u8 = 4;
