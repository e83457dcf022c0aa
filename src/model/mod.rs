mod board_card;
mod board_command;
mod board_event;
mod card;
mod deck;
mod difficulty;
mod grid_shape;

pub use board_card::{BoardCard, CardFace};
pub use board_command::BoardCommand;
pub use board_event::{BoardEvent, DeckFallbackReason, GameStatus};
pub use card::{CardDefinition, CardId, ImageRef};
pub use deck::{default_back_image, DeckConfig, DeckMode, ResolvedDeck};
pub use difficulty::Difficulty;
pub use grid_shape::GridShape;
