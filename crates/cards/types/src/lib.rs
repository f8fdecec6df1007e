//! Shared vocabulary for the workflow card access layer.
//!
//! This crate defines the types both the card store and the card client
//! speak:
//! - task pathspecs and the references/handles used to name a task
//! - per-card metadata and selection filters
//!
//! Design stance:
//! - references are a sum type, not runtime type inspection
//! - resolution scope is an explicit argument, not ambient state

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod card;
mod pathspec;
mod task;

pub use card::{CardInfo, CardSelector};
pub use pathspec::{Pathspec, PathspecError};
pub use task::{MetadataEntry, TaskHandle, TaskRef, TaskScope};
