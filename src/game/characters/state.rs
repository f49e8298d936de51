// Character disposition toward the player

/// Whether an AI character is fighting the player.
///
/// Moves from `Idle` to `Hostile` at most once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Idle,
    Hostile,
}

impl Status {
    pub fn is_hostile(&self) -> bool {
        matches!(self, Self::Hostile)
    }

    /// Turn hostile. Returns true only on the idle -> hostile edge.
    pub fn provoke(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Hostile;
                true
            }
            Self::Hostile => false,
        }
    }
}
