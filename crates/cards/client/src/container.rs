//! Ordered collection of card references for one task.

use crate::card::Card;
use crate::render;
use crate::{ClientError, ClientResult};
use cards_store::CardStore;
use cards_types::Pathspec;
use std::sync::Arc;

/// Ordered, indexable, iterable collection of the cards resolved for a
/// single task.
///
/// The container is a thin index over storage paths: per-card metadata
/// is re-read from the store every time a card is materialized, and card
/// bodies are only fetched when a materialized card is asked for one.
/// Immutable after construction.
#[derive(Debug)]
pub struct CardContainer {
    paths: Vec<String>,
    store: Arc<CardStore>,
    from_resumed: bool,
    origin_pathspec: Option<Pathspec>,
}

impl CardContainer {
    pub fn new(
        paths: Vec<String>,
        store: Arc<CardStore>,
        from_resumed: bool,
        origin_pathspec: Option<Pathspec>,
    ) -> Self {
        Self {
            paths,
            store,
            from_resumed,
            origin_pathspec,
        }
    }

    /// Number of resolved card paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether resolution was redirected through resume lineage.
    pub fn from_resumed(&self) -> bool {
        self.from_resumed
    }

    /// The clone-origin pathspec, when resolution was redirected.
    pub fn origin_pathspec(&self) -> Option<&Pathspec> {
        self.origin_pathspec.as_ref()
    }

    /// The resolved storage paths, in container order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Materialize the card at `index`.
    ///
    /// Bounds-checked: any index not less than the length fails with
    /// `IndexOutOfRange`. Type/hash/id come fresh from the store.
    pub fn get(&self, index: usize) -> ClientResult<Card> {
        if index >= self.paths.len() {
            return Err(ClientError::IndexOutOfRange {
                index,
                len: self.paths.len(),
            });
        }
        let path = &self.paths[index];
        let info = self.store.card_info_from_path(path)?;
        Ok(Card::new(self.store.clone(), path.clone(), info)
            .with_lineage(self.from_resumed, self.origin_pathspec.clone()))
    }

    /// Lazy, restartable iteration in path order.
    ///
    /// Each element is freshly constructed at iteration time, so
    /// re-iterating re-reads card metadata (not card bodies).
    pub fn iter(&self) -> impl Iterator<Item = ClientResult<Card>> + '_ {
        (0..self.paths.len()).map(move |index| self.get(index))
    }

    /// Aggregate HTML: a type-labeled heading plus an embed fragment per
    /// card, in container order.
    ///
    /// Unlike indexed access this fetches every card body eagerly.
    pub fn render_html(&self) -> ClientResult<String> {
        let mut sections = Vec::with_capacity(self.paths.len() * 2);
        for card in self.iter() {
            let mut card = card?;
            sections.push(render::type_heading(card.card_type()));
            let body = card.get()?.to_string();
            sections.push(render::embed_fragment(&body));
        }
        Ok(sections.join("\n"))
    }
}
