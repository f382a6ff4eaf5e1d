//! Pipeline entry points for lookup operations.
//!
//! - `run_load`: Fetch all chunks into a ready lookup context
//! - `run_search`: Answer a single query
//! - `run_interactive`: Answer debounced queries read from stdin

pub mod load;
pub mod render;
pub mod search;

pub use load::{build_source, run_load};
pub use render::render_outcome;
pub use search::{run_interactive, run_search};
