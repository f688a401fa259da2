use crate::game_status::insufficient_material::InsufficientMaterialRule;

/// Rules a `ChessGame` applies on top of move legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub insufficient_material: InsufficientMaterialRule,
    /// Allow `undo` to take back the final move of a finished game.
    pub undo_after_game_over: bool,
}

impl GameConfig {
    pub fn with_insufficient_material(mut self, rule: InsufficientMaterialRule) -> Self {
        self.insufficient_material = rule;
        self
    }

    pub fn with_undo_after_game_over(mut self, allowed: bool) -> Self {
        self.undo_after_game_over = allowed;
        self
    }
}
