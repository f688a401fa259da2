//! Material-only draw detection.

use crate::game_state::{chess_types::*, game_state::GameState};

/// How strictly bishop-versus-bishop endings are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsufficientMaterialRule {
    /// Any lone bishop against any lone bishop is a draw, whatever the
    /// square colors.
    #[default]
    Simplified,
    /// Lone bishops only draw when they stand on squares of the same color.
    SameColoredBishops,
}

/// Kings are ignored. Draws are: nothing vs nothing, nothing vs a lone
/// bishop or knight, and a lone bishop vs a lone bishop.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    is_insufficient_material_with(game_state, InsufficientMaterialRule::Simplified)
}

pub fn is_insufficient_material_with(game_state: &GameState, rule: InsufficientMaterialRule) -> bool {
    let mut material: [Vec<(Square, PieceKind)>; 2] = [Vec::new(), Vec::new()];
    for (square, piece) in game_state.board().pieces() {
        if piece.kind != PieceKind::King {
            material[piece.color.index()].push((square, piece.kind));
        }
    }

    let white = material[Color::White.index()].as_slice();
    let black = material[Color::Black.index()].as_slice();

    match (white, black) {
        ([], []) => true,
        ([], [(_, PieceKind::Bishop | PieceKind::Knight)]) => true,
        ([(_, PieceKind::Bishop | PieceKind::Knight)], []) => true,
        ([(white_square, PieceKind::Bishop)], [(black_square, PieceKind::Bishop)]) => match rule {
            InsufficientMaterialRule::Simplified => true,
            InsufficientMaterialRule::SameColoredBishops => {
                white_square.is_dark() == black_square.is_dark()
            }
        },
        _ => false,
    }
}
