//! Prelude module for range_picker crate.
//!
//! Re-exports the derive macros from derive_more and the logging macros used across modules.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
#[allow(unused_imports)]
pub use tracing::{debug, trace};
