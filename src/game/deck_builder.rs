use log::trace;
use rand::Rng;

use super::shuffle::shuffle;
use crate::model::{BoardCard, DeckConfig, Difficulty, GridShape, ImageRef};

/// A dealt board, ready to hand to the session: cards already shuffled and
/// numbered by slot.
#[derive(Debug, Clone)]
pub struct BuiltBoard {
    pub cards: Vec<BoardCard>,
    pub grid: GridShape,
    pub back_image: ImageRef,
}

/// Deal a board for the given deck and difficulty with a fresh rng.
pub fn build(deck: &DeckConfig, difficulty: Difficulty) -> BuiltBoard {
    build_with_rng(deck, difficulty, &mut rand::rng())
}

/// Deal a board, driving every random choice from the caller's rng.
///
/// Fallback resolution happens once up front (`DeckConfig::resolve`);
/// afterwards the construction is purely mechanical: pick
/// `floor(slots / 2)` base faces by indexing the source list with
/// wraparound, duplicate each into a pair, trim to the slot count, and
/// shuffle. Wraparound means a deck with fewer distinct faces than needed
/// pairs still fills the whole board; trimming means an odd grid deals one
/// card fewer rather than an unmatchable singleton.
pub fn build_with_rng(
    deck: &DeckConfig,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> BuiltBoard {
    let resolved = deck.resolve(difficulty);
    let total_slots = resolved.grid.total_slots();
    let needed_pairs = resolved.grid.needed_pairs();

    let mut faces: Vec<_> = (0..needed_pairs)
        .map(|i| resolved.faces[i % resolved.faces.len()].clone())
        .flat_map(|card| [card.clone(), card])
        .collect();
    faces.truncate(total_slots);
    shuffle(&mut faces, rng);

    trace!(
        target: "deck_builder",
        "Dealt {} cards ({} pairs) on a {}x{} grid from deck '{}'",
        faces.len(),
        needed_pairs,
        resolved.grid.cols,
        resolved.grid.rows,
        deck.title
    );

    BuiltBoard {
        cards: faces
            .into_iter()
            .enumerate()
            .map(|(slot, card)| BoardCard::new(slot, card))
            .collect(),
        grid: resolved.grid,
        back_image: resolved.back_image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardDefinition, CardFace, DeckConfig, ImageRef};
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn deck_with_faces(n: usize, grid: GridShape) -> DeckConfig {
        DeckConfig {
            title: "test".to_string(),
            back_image: ImageRef::file("/tmp/back.png"),
            grid_by_difficulty: HashMap::from([(Difficulty::Easy, grid)]),
            cards: (0..n)
                .map(|i| {
                    CardDefinition::new(
                        format!("c{}", i),
                        ImageRef::file(format!("/tmp/{}.png", i)),
                        format!("Card {}", i),
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_even_grid_fills_every_slot_with_exact_pairs() {
        // 3x2: 6 slots, 3 pairs, 3 distinct source faces
        let deck = deck_with_faces(3, GridShape::new(3, 2));
        let board = build(&deck, Difficulty::Easy);

        assert_eq!(board.cards.len(), 6);
        let counts = board.cards.iter().map(|c| c.id().clone()).counts();
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&n| n == 2));
        assert!(board.cards.iter().all(|c| c.face == CardFace::Down));
    }

    #[test]
    fn test_odd_grid_deals_one_card_fewer() {
        let deck = deck_with_faces(5, GridShape::new(3, 3));
        let board = build(&deck, Difficulty::Easy);

        assert_eq!(board.cards.len(), 8);
        let counts = board.cards.iter().map(|c| c.id().clone()).counts();
        assert!(counts.values().all(|&n| n == 2), "no unmatchable singleton");
    }

    #[test]
    fn test_wraparound_fills_board_from_a_single_face() {
        // 2x2 with one source face: all four cards share the identity
        let deck = deck_with_faces(1, GridShape::new(2, 2));
        let board = build(&deck, Difficulty::Easy);

        assert_eq!(board.cards.len(), 4);
        assert!(board
            .cards
            .iter()
            .all(|c| c.id() == board.cards[0].id()));
    }

    #[test]
    fn test_empty_deck_falls_back_to_default_faces() {
        let deck = deck_with_faces(0, GridShape::new(6, 4));
        let board = build(&deck, Difficulty::Easy);

        assert_eq!(board.cards.len(), 24);
        let counts = board.cards.iter().map(|c| c.id().clone()).counts();
        assert_eq!(counts.len(), 12);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_invalid_grid_falls_back_to_default_shape() {
        let deck = deck_with_faces(13, GridShape::new(0, 0));
        let board = build(&deck, Difficulty::Easy);

        assert_eq!(board.grid, GridShape::FALLBACK);
        assert_eq!(board.cards.len(), GridShape::FALLBACK.total_slots());
    }

    #[test]
    fn test_slots_are_assigned_after_shuffling() {
        let deck = deck_with_faces(12, GridShape::new(6, 4));
        let board = build_with_rng(&deck, Difficulty::Easy, &mut StdRng::seed_from_u64(3));

        for (i, card) in board.cards.iter().enumerate() {
            assert_eq!(card.slot, i);
        }
    }

    #[test]
    fn test_deals_differ_across_rngs() {
        let deck = deck_with_faces(12, GridShape::new(6, 4));
        let a = build_with_rng(&deck, Difficulty::Easy, &mut StdRng::seed_from_u64(1));
        let b = build_with_rng(&deck, Difficulty::Easy, &mut StdRng::seed_from_u64(2));

        let ids = |board: &BuiltBoard| {
            board
                .cards
                .iter()
                .map(|c| c.id().clone())
                .collect::<Vec<_>>()
        };
        assert_ne!(ids(&a), ids(&b));
    }

    #[test]
    fn test_back_image_carries_through() {
        let deck = deck_with_faces(4, GridShape::new(2, 2));
        let board = build(&deck, Difficulty::Easy);
        assert_eq!(board.back_image, ImageRef::file("/tmp/back.png"));
    }
}
