//! Environment-driven storage configuration.

use std::env;

/// Fixed card-subdirectory suffix. Joined onto a task's `ds-root`
/// metadata value when the backend has no configured root of its own.
pub const CARD_ROOT_SUFFIX: &str = "cards";

/// Configured storage root for a backend.
///
/// Read from `CARDS_<ID>_ROOT` (e.g. `CARDS_LOCAL_ROOT`); dashes in the
/// backend identifier map to underscores. Empty values count as unset.
pub fn storage_root(backend_id: &str) -> Option<String> {
    let key = format!(
        "CARDS_{}_ROOT",
        backend_id.to_uppercase().replace('-', "_")
    );
    env::var(key).ok().filter(|value| !value.is_empty())
}
