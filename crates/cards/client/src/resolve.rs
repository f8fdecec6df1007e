//! Card path resolution by listing the store.

use crate::{CardPathResolver, ClientResult};
use cards_store::{CardStore, StoreError};
use cards_types::{CardSelector, Pathspec};
use std::sync::Arc;

/// Path resolver that lists the task's canonical cards prefix and
/// filters on the selector's type/id, both parsed from the file name.
///
/// Reference implementation of the resolution seam; an orchestration
/// deployment with its own history index implements
/// [`crate::CardPathResolver`] against that index instead.
#[derive(Debug, Default)]
pub struct ListingResolver;

impl ListingResolver {
    pub fn new() -> Self {
        Self
    }
}

impl CardPathResolver for ListingResolver {
    fn resolve(
        &self,
        store: Arc<CardStore>,
        pathspec: &Pathspec,
        selector: &CardSelector,
    ) -> ClientResult<(Vec<String>, Arc<CardStore>)> {
        let mut paths = Vec::new();
        for path in store.list_cards(pathspec)? {
            let info = match store.card_info_from_path(&path) {
                Ok(info) => info,
                // Foreign files under the cards prefix are not cards.
                Err(StoreError::InvalidCardName(_)) => continue,
                Err(err) => return Err(err.into()),
            };
            if let Some(want) = &selector.card_type {
                if *want != info.card_type {
                    continue;
                }
            }
            if let Some(want) = &selector.card_id {
                if info.id.as_deref() != Some(want.as_str()) {
                    continue;
                }
            }
            paths.push(path);
        }
        Ok((paths, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cards_store::InMemoryObjectStore;
    use cards_types::CardInfo;

    fn make_store(cards: &[CardInfo]) -> Arc<CardStore> {
        let objects = Arc::new(InMemoryObjectStore::new());
        for info in cards {
            let path = format!(
                "MyFlow/123/start/456/cards/{}",
                cards_store::card_file_name(info)
            );
            objects.put(path, "<html/>").unwrap();
        }
        objects
            .put("MyFlow/123/start/456/cards/notes.txt", "not a card")
            .unwrap();
        Arc::new(CardStore::new("MyFlow", objects, "memory"))
    }

    fn pathspec() -> Pathspec {
        "MyFlow/123/start/456".parse().unwrap()
    }

    fn fixture_cards() -> Vec<CardInfo> {
        vec![
            CardInfo::new("default", "aaa"),
            CardInfo::new("chart", "bbb"),
            CardInfo::new("default", "ccc").with_id("summary"),
        ]
    }

    #[test]
    fn test_resolves_all_cards_skipping_foreign_files() {
        let store = make_store(&fixture_cards());
        let (paths, _store) = ListingResolver::new()
            .resolve(store, &pathspec(), &CardSelector::new())
            .unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.ends_with(".html")));
    }

    #[test]
    fn test_type_filter() {
        let store = make_store(&fixture_cards());
        let selector = CardSelector::new().with_type("chart");
        let (paths, _store) = ListingResolver::new()
            .resolve(store, &pathspec(), &selector)
            .unwrap();
        assert_eq!(paths, ["MyFlow/123/start/456/cards/chart-bbb.html"]);
    }

    #[test]
    fn test_id_filter() {
        let store = make_store(&fixture_cards());
        let selector = CardSelector::new().with_id("summary");
        let (paths, _store) = ListingResolver::new()
            .resolve(store, &pathspec(), &selector)
            .unwrap();
        assert_eq!(
            paths,
            ["MyFlow/123/start/456/cards/summary-default-ccc.html"]
        );
    }

    #[test]
    fn test_no_cards_resolves_empty() {
        let store = make_store(&[]);
        let (paths, _store) = ListingResolver::new()
            .resolve(store, &pathspec(), &CardSelector::new())
            .unwrap();
        assert!(paths.is_empty());
    }
}
