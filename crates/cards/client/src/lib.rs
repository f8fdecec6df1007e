//! Client-side accessor for the HTML cards produced by workflow tasks.
//!
//! This crate resolves which stored cards belong to a task, fetches
//! card bodies lazily, and renders them for embedding or preview:
//! - [`CardClient::get_cards`] turns a task reference into a
//!   [`CardContainer`], optionally following resume lineage back to the
//!   clone origin
//! - [`Card`] fetches its HTML body once, on first access
//! - rendering produces plain markup; previewing hands a temp file to
//!   the host's default web viewer
//!
//! The orchestration engine, metadata service, and path resolution are
//! collaborators behind the [`TaskSource`], [`LineageResolver`], and
//! [`CardPathResolver`] traits; deterministic reference implementations
//! ship for tests and embedding.
//!
//! Everything here is synchronous and blocking: each call runs to
//! completion on the caller's thread or returns the collaborator's
//! error unchanged.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod card;
mod client;
mod container;
mod error;
mod lineage;
mod memory;
mod render;
mod resolve;
mod traits;

pub use card::Card;
pub use client::{CardClient, DS_ROOT_KEY, DS_TYPE_KEY};
pub use container::CardContainer;
pub use error::{ClientError, ClientResult};
pub use lineage::{MetadataLineage, ORIGIN_RUN_KEY, ORIGIN_TASK_KEY};
pub use memory::InMemoryTaskSource;
pub use resolve::ListingResolver;
pub use traits::{CardPathResolver, LineageResolver, TaskSource};

// Re-exported for downstream consumers, so embedders depend on one crate.
pub use cards_store as store;
pub use cards_types as types;
