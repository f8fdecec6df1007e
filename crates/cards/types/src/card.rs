//! Card metadata and selection filters.

use serde::{Deserialize, Serialize};

/// Per-path card metadata served by the card store.
///
/// The container never caches these; they are re-read from the store each
/// time a card is materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Card type tag (e.g. `default`).
    pub card_type: String,
    /// Content hash, the card's identity marker within its task.
    pub hash: String,
    /// Optional user-assigned card identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CardInfo {
    pub fn new(card_type: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            card_type: card_type.into(),
            hash: hash.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Filter describing which of a task's cards to resolve.
///
/// The default selector matches every card and follows resume lineage.
#[derive(Debug, Clone)]
pub struct CardSelector {
    /// Restrict to cards of this type.
    pub card_type: Option<String>,
    /// Restrict to the card with this identifier.
    pub card_id: Option<String>,
    /// Resolve against the clone origin when the task was resumed.
    pub follow_resumed: bool,
}

impl Default for CardSelector {
    fn default() -> Self {
        Self {
            card_type: None,
            card_id: None,
            follow_resumed: true,
        }
    }
}

impl CardSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    pub fn with_id(mut self, card_id: impl Into<String>) -> Self {
        self.card_id = Some(card_id.into());
        self
    }

    pub fn follow_resumed(mut self, follow: bool) -> Self {
        self.follow_resumed = follow;
        self
    }
}
