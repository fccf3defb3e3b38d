//! Persistence layer for the Idlepet simulation.
//!
//! Stores the single game record as a flat camelCase JSON document on the
//! local filesystem. [`JsonFileStore`] implements the core's
//! [`StateStore`](idlepet_core::StateStore) contract, which is fail-open;
//! the typed `try_*` methods expose the underlying [`StoreError`] for
//! tooling that wants to report failures.
//!
//! # Modules
//!
//! - [`error`] -- Error type for storage operations ([`StoreError`])
//! - [`file_store`] -- JSON file store ([`JsonFileStore`])

pub mod error;
pub mod file_store;

pub use error::StoreError;
pub use file_store::JsonFileStore;
