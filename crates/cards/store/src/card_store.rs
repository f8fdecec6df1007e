//! Flow-scoped card store handle.
//!
//! The handle the client consumes: it knows which flow it serves, which
//! object store holds the cards, and the resolved storage root. The root
//! is never optional; listing breaks without one, so resolution refuses
//! to construct a handle until a root is known.

use crate::backend::ObjectStore;
use crate::{StoreError, StoreResult};
use cards_types::{CardInfo, Pathspec};
use std::fmt;
use std::sync::Arc;

/// File name for a card with the given metadata.
///
/// Cards are stored as `TYPE-HASH.html`, or `ID-TYPE-HASH.html` when the
/// card carries a user-assigned identifier. Type and id must therefore
/// not contain dashes; writers enforce this at save time.
pub fn card_file_name(info: &CardInfo) -> String {
    match &info.id {
        Some(id) => format!("{}-{}-{}.html", id, info.card_type, info.hash),
        None => format!("{}-{}.html", info.card_type, info.hash),
    }
}

/// Flow-scoped card storage handle.
pub struct CardStore {
    flow_name: String,
    root: String,
    store: Arc<dyn ObjectStore>,
}

impl CardStore {
    /// Construct a handle over `store`, scoped to `flow_name`, with the
    /// already-resolved storage `root`.
    pub fn new(
        flow_name: impl Into<String>,
        store: Arc<dyn ObjectStore>,
        root: impl Into<String>,
    ) -> Self {
        Self {
            flow_name: flow_name.into(),
            root: root.into(),
            store,
        }
    }

    pub fn flow_name(&self) -> &str {
        &self.flow_name
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Fetch the HTML body of the card stored at `path`.
    pub fn get_card_html(&self, path: &str) -> StoreResult<String> {
        let bytes = self.store.load(path)?;
        tracing::debug!(path, bytes = bytes.len(), "card body fetched");
        String::from_utf8(bytes).map_err(|_| StoreError::NotUtf8(path.to_string()))
    }

    /// Card metadata parsed from a storage path's file name.
    pub fn card_info_from_path(&self, path: &str) -> StoreResult<CardInfo> {
        let base = path.rsplit('/').next().unwrap_or(path);
        let stem = base
            .strip_suffix(".html")
            .ok_or_else(|| StoreError::InvalidCardName(base.to_string()))?;
        let parts: Vec<&str> = stem.split('-').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(StoreError::InvalidCardName(base.to_string()));
        }
        match parts.as_slice() {
            [card_type, hash] => Ok(CardInfo::new(*card_type, *hash)),
            [id, card_type, hash] => Ok(CardInfo::new(*card_type, *hash).with_id(*id)),
            _ => Err(StoreError::InvalidCardName(base.to_string())),
        }
    }

    /// Canonical listing prefix for one task's cards.
    pub fn cards_prefix(&self, pathspec: &Pathspec) -> String {
        format!(
            "{}/{}/{}/{}/cards",
            pathspec.flow_name(),
            pathspec.run_id(),
            pathspec.step_name(),
            pathspec.task_id()
        )
    }

    /// List the storage paths of all cards recorded for `pathspec`.
    pub fn list_cards(&self, pathspec: &Pathspec) -> StoreResult<Vec<String>> {
        self.store.list(&self.cards_prefix(pathspec))
    }
}

impl fmt::Debug for CardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStore")
            .field("flow_name", &self.flow_name)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
