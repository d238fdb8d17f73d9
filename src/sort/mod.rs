//! Multi-key sorting: raw specifications, typed keys, and the cascading
//! comparator compiled from them.

pub mod key;
pub mod spec;

pub use key::{SortDirection, SortKey, SortSpecError};
pub use spec::{CompiledSort, SortLayerSpec, SortSpec};
