use uuid::Uuid;

use super::{DeckMode, Difficulty};

/// Everything the UI (or a timer) may ask the board session to do. Cards
/// emit `CardActivate` from their `clicked` signal, which GTK fires for
/// both pointer clicks and Enter/Space on the focused card, so there is a
/// single activation path into the state machine.
#[derive(Debug, Clone)]
pub enum BoardCommand {
    CardActivate(usize),
    /// Sent by the flip-back scheduler after the mismatch delay. Carries
    /// the playthrough id it was scheduled for; stale ids are ignored.
    ResolveMismatch(Uuid),
    /// Deal a fresh board, optionally switching difficulty first.
    NewGame(Option<Difficulty>),
    /// Switch decks and deal a fresh board.
    UseDeck(DeckMode),
    /// Re-emit the current board state for late-joining widgets.
    InitDisplay,
}
