//! Treasure loader contract: resolve a treasure index to its backing
//! resource.

use crate::protocol::FrameKind;

/// Accepted resource categories. Extending this means adding the matching
/// name-announce frame kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Text,
    Video,
    Image,
}

impl Category {
    /// Category for a file extension, if it is an accepted kind.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "txt" => Some(Category::Text),
            "mp4" => Some(Category::Video),
            "jpg" => Some(Category::Image),
            _ => None,
        }
    }

    /// The name-announce kind carrying this category.
    pub fn name_kind(self) -> FrameKind {
        match self {
            Category::Text => FrameKind::NameText,
            Category::Video => FrameKind::NameVideo,
            Category::Image => FrameKind::NameImage,
        }
    }
}

/// One loaded treasure: its raw bytes, held for exactly one transfer
/// attempt and dropped on every exit path.
pub struct Resource {
    pub category: Category,
    pub display_name: String,
    bytes: Vec<u8>,
}

impl Resource {
    pub fn new(category: Category, display_name: String, bytes: Vec<u8>) -> Self {
        Self {
            category,
            display_name,
            bytes,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A treasure's backing resource could not be resolved or validated.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no resource found for treasure {0}")]
    NotFound(usize),
    #[error("resource `{0}` is not a regular file")]
    NotRegular(String),
    #[error("resource `{0}` is not an accepted kind")]
    UnsupportedKind(String),
    #[error("i/o error reading resource: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves logical treasure indices (0-based) to resources.
pub trait TreasureLoader {
    fn resolve(&self, index: usize) -> Result<Resource, LoadError>;
}
