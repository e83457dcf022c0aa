use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identity shared by the two board cards of a pair. Matching compares
/// these, never image references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        CardId(id.into())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a card face (or back) image lives: bundled in the gresource
/// archive, or a file supplied by the player for a custom deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageRef {
    Resource(String),
    File(PathBuf),
}

impl ImageRef {
    pub fn resource(path: impl Into<String>) -> Self {
        ImageRef::Resource(path.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageRef::File(path.into())
    }
}

/// One face definition from a deck. Immutable; board cards copy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub image: ImageRef,
    pub label: String,
}

impl CardDefinition {
    pub fn new(id: impl Into<String>, image: ImageRef, label: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            image,
            label: label.into(),
        }
    }
}
