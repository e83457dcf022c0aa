use uuid::Uuid;

use super::{BoardCard, GridShape, ImageRef};

/// Structural status of the session; the status bar owns the localized
/// wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ready,
    PairFound,
    Completed,
}

/// Why a requested custom deck was not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFallbackReason {
    NoPlayableCards,
}

/// Everything the board session tells the world. Widgets subscribe to the
/// subset they render; none of them mutate session state directly.
#[derive(Debug, Clone)]
pub enum BoardEvent {
    /// A fresh deal. Carries the full card list (identity + state) so the
    /// presentation layer can rebuild itself from scratch.
    BoardDealt {
        cards: Vec<BoardCard>,
        grid: GridShape,
        back_image: ImageRef,
        playthrough_id: Uuid,
    },
    CardFlipped {
        slot: usize,
    },
    CardsFlippedDown {
        slots: [usize; 2],
    },
    PairMatched {
        slots: [usize; 2],
        pairs_remaining: usize,
    },
    /// Two mismatched cards are showing and the board is locked until the
    /// scheduler resolves it.
    MismatchDetected {
        slots: [usize; 2],
        playthrough_id: Uuid,
    },
    StatusChanged(GameStatus),
    PairsRemainingChanged(usize),
    /// Fires exactly once per playthrough, on the first successful match.
    FirstMatchAchieved,
    /// Fires exactly once per playthrough, when every card is matched.
    SessionCompleted,
    DeckFallback(DeckFallbackReason),
}
