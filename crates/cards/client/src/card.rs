//! One stored card.

use crate::render;
use crate::{ClientError, ClientResult};
use cards_store::CardStore;
use cards_types::{CardInfo, Pathspec};
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// One stored card: the HTML artifact of a task execution.
///
/// The body is fetched from the store on first access and cached for the
/// card's lifetime; it is never invalidated. Apart from that cache the
/// card owns nothing but, after a preview, one temp file.
#[derive(Debug)]
pub struct Card {
    store: Arc<CardStore>,
    path: String,
    card_type: String,
    hash: String,
    id: Option<String>,
    html: Option<String>,
    // TODO: populate once the store records card creation time.
    created_at: Option<DateTime<Utc>>,
    from_resumed: bool,
    origin_pathspec: Option<Pathspec>,
    preview_file: Option<NamedTempFile>,
}

impl Card {
    /// Build a card over `store` at `path`, described by `info`.
    pub fn new(store: Arc<CardStore>, path: impl Into<String>, info: CardInfo) -> Self {
        Self {
            store,
            path: path.into(),
            card_type: info.card_type,
            hash: info.hash,
            id: info.id,
            html: None,
            created_at: None,
            from_resumed: false,
            origin_pathspec: None,
            preview_file: None,
        }
    }

    /// Mark how this card was resolved, builder style.
    pub fn with_lineage(mut self, from_resumed: bool, origin_pathspec: Option<Pathspec>) -> Self {
        self.from_resumed = from_resumed;
        self.origin_pathspec = origin_pathspec;
        self
    }

    /// The HTML body, fetched once and cached.
    ///
    /// The first call loads through the card store and caches the result;
    /// later calls are pure reads. Store failures propagate unchanged.
    pub fn get(&mut self) -> ClientResult<&str> {
        let body = match self.html.take() {
            Some(body) => body,
            None => self.store.get_card_html(&self.path)?,
        };
        Ok(self.html.insert(body).as_str())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn card_type(&self) -> &str {
        &self.card_type
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn from_resumed(&self) -> bool {
        self.from_resumed
    }

    pub fn origin_pathspec(&self) -> Option<&Pathspec> {
        self.origin_pathspec.as_ref()
    }

    /// Embeddable HTML fragment wrapping the card body in a
    /// uniquely-identified container element.
    pub fn render_html(&mut self) -> ClientResult<String> {
        let body = self.get()?;
        Ok(render::embed_fragment(body))
    }

    /// Open the card in the host's default web viewer.
    ///
    /// Writes the body to a fresh `.html` temp file and hands it to the
    /// system opener. The file lives as long as this card holds it; the
    /// next preview replaces it, deleting the previous one.
    pub fn preview(&mut self) -> ClientResult<()> {
        let file = self.write_preview_file()?;
        opener::open(file.path()).map_err(|err| ClientError::Preview(err.to_string()))
    }

    fn write_preview_file(&mut self) -> ClientResult<&NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("card-")
            .suffix(".html")
            .tempfile()
            .map_err(|err| ClientError::Preview(err.to_string()))?;
        let body = self.get()?;
        file.write_all(body.as_bytes())
            .map_err(|err| ClientError::Preview(err.to_string()))?;
        file.flush()
            .map_err(|err| ClientError::Preview(err.to_string()))?;
        Ok(self.preview_file.insert(file))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Card at '{}'>", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cards_store::{InMemoryObjectStore, ObjectStore, StoreResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Object store that counts `load` calls, for cache assertions.
    struct CountingStore {
        inner: InMemoryObjectStore,
        loads: AtomicUsize,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                inner: InMemoryObjectStore::new(),
                loads: AtomicUsize::new(0),
            }
        }
    }

    impl ObjectStore for CountingStore {
        fn load(&self, path: &str) -> StoreResult<Vec<u8>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(path)
        }

        fn list(&self, prefix: &str) -> StoreResult<Vec<String>> {
            self.inner.list(prefix)
        }
    }

    fn make_card(objects: Arc<CountingStore>) -> Card {
        objects
            .inner
            .put("MyFlow/123/start/456/cards/default-abc.html", "<p>body</p>")
            .unwrap();
        let store = Arc::new(CardStore::new("MyFlow", objects, "memory"));
        Card::new(
            store,
            "MyFlow/123/start/456/cards/default-abc.html",
            CardInfo::new("default", "abc"),
        )
    }

    #[test]
    fn test_get_fetches_once_and_caches() {
        let objects = Arc::new(CountingStore::new());
        let mut card = make_card(objects.clone());

        let first = card.get().unwrap().to_string();
        let second = card.get().unwrap().to_string();

        assert_eq!(first, "<p>body</p>");
        assert_eq!(first, second);
        assert_eq!(objects.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_get_propagates_missing_card() {
        let objects = Arc::new(CountingStore::new());
        let store = Arc::new(CardStore::new("MyFlow", objects, "memory"));
        let mut card = Card::new(store, "MyFlow/1/a/2/cards/gone-x.html", CardInfo::new("gone", "x"));
        assert!(matches!(
            card.get(),
            Err(ClientError::Store(cards_store::StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn test_render_html_embeds_cached_body() {
        let objects = Arc::new(CountingStore::new());
        let mut card = make_card(objects.clone());

        let first = card.render_html().unwrap();
        let second = card.render_html().unwrap();

        assert!(first.contains("<p>body</p>"));
        // Fresh container id per render, single underlying fetch.
        assert_ne!(first, second);
        assert_eq!(objects.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_display_embeds_path() {
        let objects = Arc::new(CountingStore::new());
        let card = make_card(objects);
        assert_eq!(
            card.to_string(),
            "<Card at 'MyFlow/123/start/456/cards/default-abc.html'>"
        );
    }

    #[test]
    fn test_preview_file_is_replaced_not_accumulated() {
        let objects = Arc::new(CountingStore::new());
        let mut card = make_card(objects);

        let first_path = card.write_preview_file().unwrap().path().to_path_buf();
        assert!(first_path.exists());
        assert_eq!(
            std::fs::read_to_string(&first_path).unwrap(),
            "<p>body</p>"
        );

        let second_path = card.write_preview_file().unwrap().path().to_path_buf();
        assert!(second_path.exists());
        assert!(!first_path.exists(), "previous preview file must be deleted");

        drop(card);
        assert!(!second_path.exists(), "dropping the card removes its preview");
    }
}
