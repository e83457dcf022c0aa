use fluent_i18n::t;
use serde::{Deserialize, Serialize};

use super::GridShape;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn from_index(index: usize) -> Difficulty {
        match index {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Grid used when a deck does not override this difficulty.
    pub fn default_grid(&self) -> GridShape {
        match self {
            Difficulty::Easy => GridShape::new(6, 4),
            Difficulty::Medium => GridShape::new(7, 4),
            Difficulty::Hard => GridShape::new(8, 4),
        }
    }

    pub fn to_string(&self) -> String {
        match self {
            Difficulty::Easy => t!("difficulty-easy"),
            Difficulty::Medium => t!("difficulty-medium"),
            Difficulty::Hard => t!("difficulty-hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for difficulty in Difficulty::all() {
            assert_eq!(Difficulty::from_index(difficulty.index()), difficulty);
        }
        assert_eq!(Difficulty::from_index(99), Difficulty::Easy);
    }

    #[test]
    fn test_default_grids_are_even() {
        for difficulty in Difficulty::all() {
            assert_eq!(difficulty.default_grid().total_slots() % 2, 0);
        }
    }
}
