//! Sort specifications: the raw JSON shape and its compiled form.
//!
//! JSON shape (an ordered array; the first layer is the primary key):
//! [
//!   { "sortOn": "first_name", "direction": "ascending" },
//!   { "sortOn": "dob",        "direction": "ascending" }
//! ]
//!
//! Raw layers are compiled to typed ones before any comparison happens, so
//! a spec with an unknown tag fails as a whole, up front.

use crate::person::Person;
use crate::sort::key::{SortDirection, SortKey, SortSpecError};
use serde::Deserialize;
use std::cmp::Ordering;

/// One raw layer, as it appears in a sort spec file.
#[derive(Debug, Clone, Deserialize)]
pub struct SortLayerSpec {
    #[serde(rename = "sortOn")]
    pub sort_on: String,
    pub direction: String,
}

impl SortLayerSpec {
    pub fn new(sort_on: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            sort_on: sort_on.into(),
            direction: direction.into(),
        }
    }
}

/// An ordered list of raw layers. Layer order defines tie-break precedence.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SortSpec {
    pub layers: Vec<SortLayerSpec>,
}

impl SortSpec {
    pub fn new(layers: Vec<SortLayerSpec>) -> Self {
        Self { layers }
    }

    /// Resolve every tag, failing on the first unknown one. No comparison
    /// uses raw tags after this point.
    pub fn compile(&self) -> Result<CompiledSort, SortSpecError> {
        let layers = self
            .layers
            .iter()
            .map(|raw| {
                Ok(CompiledLayer {
                    key: SortKey::from_tag(&raw.sort_on)?,
                    direction: SortDirection::from_tag(&raw.direction)?,
                })
            })
            .collect::<Result<Vec<_>, SortSpecError>>()?;
        Ok(CompiledSort { layers })
    }
}

#[derive(Debug, Clone, Copy)]
struct CompiledLayer {
    key: SortKey,
    direction: SortDirection,
}

/// A validated spec, usable as a total-order comparator over records.
#[derive(Debug, Clone)]
pub struct CompiledSort {
    layers: Vec<CompiledLayer>,
}

impl CompiledSort {
    /// Cascading comparison: the first layer whose projected values differ
    /// decides, with that layer's direction; later layers are never
    /// consulted. All layers equal means the pair is equal, and relative
    /// order is left to the (stable) sort that calls this.
    pub fn compare(&self, lhs: &Person, rhs: &Person) -> Ordering {
        for layer in &self.layers {
            match layer.key.cmp_on(lhs, rhs) {
                Ordering::Equal => continue,
                ord => return layer.direction.apply(ord),
            }
        }
        Ordering::Equal
    }
}
