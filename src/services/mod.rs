//! Service layer for the lookup application.
//!
//! This module contains the business logic for:
//! - Dataset loading (`ChunkLoader`)
//! - Query matching (`Matcher`)
//! - The queryable data context (`Lookup`)

pub mod loader;
mod lookup;
mod matcher;

pub use loader::ChunkLoader;
pub use lookup::{LoadState, Lookup, SearchOutcome};
pub use matcher::{Matcher, is_cjk, normalize_query, split_mixed};
