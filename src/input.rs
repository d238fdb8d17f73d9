//! Input plumbing: read people and sort specs from JSON files.
//!
//! People file shape (a single object is also accepted):
//! [
//!   {
//!     "name": { "first": "Jo", "middle": "Q", "last": "Lee" },
//!     "dob": "2001-05-06"
//!   },
//!   ...
//! ]
//!
//! Dates are accepted as ISO (`2001-05-06`) or in the rendered form
//! (`Sun May 06 2001`), so output files can be fed back in as input.

use crate::ids::IdAssigner;
use crate::person::{Name, Person, parse_dob};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw person shape as it appears in the input file. Ids are never read
/// from disk; they are issued at construction.
#[derive(Debug, Clone, Deserialize)]
struct RawPerson {
    name: Name,
    dob: String,
}

/// The file may hold one person or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PeopleFile {
    Many(Vec<RawPerson>),
    One(RawPerson),
}

/// Read and validate a people file, issuing ids in file order.
pub fn load_people(path: &Path, ids: &IdAssigner) -> anyhow::Result<Vec<Person>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read people file {}", path.display()))?;
    let parsed: PeopleFile = serde_json::from_str(&text)
        .with_context(|| format!("parse people file {}", path.display()))?;

    let raw = match parsed {
        PeopleFile::Many(v) => v,
        PeopleFile::One(p) => vec![p],
    };

    let mut people = Vec::with_capacity(raw.len());
    for (i, rp) in raw.into_iter().enumerate() {
        let dob = parse_dob(&rp.dob)
            .with_context(|| format!("bad dob {:?} in record {} of {}", rp.dob, i, path.display()))?;
        let person = Person::new(rp.name, dob, ids)
            .with_context(|| format!("invalid record {} of {}", i, path.display()))?;
        people.push(person);
    }
    Ok(people)
}

/// Read a sort spec file. Tag validation happens later, when the spec is
/// compiled against a group.
pub fn load_sort_spec(path: &Path) -> anyhow::Result<crate::sort::SortSpec> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read sort spec {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse sort spec {}", path.display()))
}
