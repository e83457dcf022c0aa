use fluent_i18n::t;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{CardDefinition, Difficulty, GridShape, ImageRef};

const DEFAULT_FACE_COUNT: usize = 13;

/// Which deck the player is currently playing with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckMode {
    Default,
    Custom,
}

impl Default for DeckMode {
    fn default() -> Self {
        DeckMode::Default
    }
}

/// A named set of card faces plus a back image and per-difficulty grids.
/// User-supplied decks are opaque data; every lookup degrades to a default
/// instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    pub title: String,
    pub back_image: ImageRef,
    #[serde(default)]
    pub grid_by_difficulty: HashMap<Difficulty, GridShape>,
    pub cards: Vec<CardDefinition>,
}

/// Output of the single resolve-with-defaults step: every field is
/// populated and valid, so the deck builder never consults fallbacks.
#[derive(Debug, Clone)]
pub struct ResolvedDeck {
    pub faces: Vec<CardDefinition>,
    pub grid: GridShape,
    pub back_image: ImageRef,
}

impl DeckConfig {
    /// The bundled deck. Always non-empty, which is what guarantees the
    /// fail-soft policy bottoms out somewhere playable.
    pub fn default_deck() -> DeckConfig {
        let cards = (1..=DEFAULT_FACE_COUNT)
            .map(|n| {
                CardDefinition::new(
                    n.to_string(),
                    ImageRef::resource(format!("/org/pairhunt/cards/{}.svg", n)),
                    format!("{} {}", t!("figure-label"), n),
                )
            })
            .collect();

        DeckConfig {
            title: t!("deck-default"),
            back_image: default_back_image(),
            grid_by_difficulty: Difficulty::all()
                .into_iter()
                .map(|d| (d, d.default_grid()))
                .collect(),
            cards,
        }
    }

    pub fn grid_for(&self, difficulty: Difficulty) -> GridShape {
        self.grid_by_difficulty
            .get(&difficulty)
            .copied()
            .unwrap_or_else(|| difficulty.default_grid())
            .or_fallback()
    }

    /// Resolve all implicit fallbacks in one step (deck faces, grid shape,
    /// back image); the rest of the core consumes the result as-is.
    pub fn resolve(&self, difficulty: Difficulty) -> ResolvedDeck {
        let faces = if self.cards.is_empty() {
            DeckConfig::default_deck().cards
        } else {
            self.cards.clone()
        };

        ResolvedDeck {
            faces,
            grid: self.grid_for(difficulty),
            back_image: usable_back_image(&self.back_image),
        }
    }

    /// Load the player's saved custom deck, or `None` when there is no
    /// usable one (missing file, unparsable contents, zero cards).
    pub fn load_saved() -> Option<DeckConfig> {
        DeckConfig::load_saved_from(&DeckConfig::deck_path())
    }

    fn load_saved_from(path: &Path) -> Option<DeckConfig> {
        let contents = fs::read_to_string(path).ok()?;
        let mut deck = serde_json::from_str::<DeckConfig>(&contents).ok()?;
        if deck.cards.is_empty() {
            return None;
        }
        deck.back_image = usable_back_image(&deck.back_image);
        // Saved decks always play on the stock grids.
        deck.grid_by_difficulty = Difficulty::all()
            .into_iter()
            .map(|d| (d, d.default_grid()))
            .collect();
        Some(deck)
    }

    pub fn save_custom(&self) -> Result<(), std::io::Error> {
        self.save_to(&DeckConfig::deck_path())
    }

    fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string(self)?;
        fs::write(path, contents)
    }

    fn deck_path() -> PathBuf {
        glib::user_data_dir().join("pairhunt").join("deck.json")
    }
}

pub fn default_back_image() -> ImageRef {
    ImageRef::resource("/org/pairhunt/cards/back-default.svg")
}

fn usable_back_image(back: &ImageRef) -> ImageRef {
    match back {
        ImageRef::File(path) if path.as_os_str().is_empty() => default_back_image(),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn deck_with_cards(cards: Vec<CardDefinition>) -> DeckConfig {
        DeckConfig {
            title: "test".to_string(),
            back_image: default_back_image(),
            grid_by_difficulty: HashMap::new(),
            cards,
        }
    }

    #[test]
    fn test_default_deck_is_playable() {
        let deck = DeckConfig::default_deck();
        assert_eq!(deck.cards.len(), DEFAULT_FACE_COUNT);
        assert_eq!(deck.grid_for(Difficulty::Easy), GridShape::new(6, 4));
        assert_eq!(deck.grid_for(Difficulty::Hard), GridShape::new(8, 4));
    }

    #[test]
    fn test_resolve_substitutes_default_faces_for_empty_deck() {
        let resolved = deck_with_cards(vec![]).resolve(Difficulty::Easy);
        assert_eq!(resolved.faces.len(), DEFAULT_FACE_COUNT);
    }

    #[test]
    fn test_grid_for_falls_back_per_difficulty_then_to_fallback_shape() {
        let mut deck = deck_with_cards(vec![]);
        assert_eq!(deck.grid_for(Difficulty::Medium), GridShape::new(7, 4));

        deck.grid_by_difficulty
            .insert(Difficulty::Medium, GridShape::new(0, 9));
        assert_eq!(deck.grid_for(Difficulty::Medium), GridShape::FALLBACK);
    }

    #[test]
    fn test_empty_back_image_path_is_replaced() {
        let mut deck = deck_with_cards(vec![CardDefinition::new(
            "a",
            ImageRef::file("/tmp/a.png"),
            "A",
        )]);
        deck.back_image = ImageRef::file("");
        let resolved = deck.resolve(Difficulty::Easy);
        assert_eq!(resolved.back_image, default_back_image());
    }

    #[test]
    #[serial]
    fn test_saved_deck_round_trip_forces_stock_grids() {
        let path = std::env::temp_dir().join("pairhunt-test-deck.json");
        let mut deck = deck_with_cards(vec![CardDefinition::new(
            "u-1",
            ImageRef::file("/tmp/u1.png"),
            "Card 1",
        )]);
        deck.grid_by_difficulty
            .insert(Difficulty::Easy, GridShape::new(2, 2));
        deck.save_to(&path).unwrap();

        let loaded = DeckConfig::load_saved_from(&path).unwrap();
        assert_eq!(loaded.cards, deck.cards);
        assert_eq!(loaded.grid_for(Difficulty::Easy), GridShape::new(6, 4));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    #[serial]
    fn test_unusable_saved_decks_load_as_none() {
        let path = std::env::temp_dir().join("pairhunt-test-deck.json");

        assert!(DeckConfig::load_saved_from(&path).is_none());

        std::fs::write(&path, "not json at all").unwrap();
        assert!(DeckConfig::load_saved_from(&path).is_none());

        deck_with_cards(vec![]).save_to(&path).unwrap();
        assert!(DeckConfig::load_saved_from(&path).is_none());

        std::fs::remove_file(&path).unwrap();
    }
}
