//! Person records: a name, a date of birth, and an id issued at construction.

mod dob;

pub use dob::{DISPLAY_FORMAT, parse_dob};

use crate::ids::IdAssigner;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A basic name with an optional middle name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    pub last: String,
}

/// Malformed person data, detected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name field '{0}' must not be empty")]
    EmptyNameField(&'static str),
}

/// A single person. Immutable once constructed; the id is issued exactly
/// once and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: u64,
    name: Name,
    #[serde(with = "dob")]
    dob: NaiveDate,
}

impl Person {
    /// Builds a record, obtaining a fresh id from `ids`. Rejects empty
    /// first or last names.
    pub fn new(name: Name, dob: NaiveDate, ids: &IdAssigner) -> Result<Self, ValidationError> {
        if name.first.is_empty() {
            return Err(ValidationError::EmptyNameField("first"));
        }
        if name.last.is_empty() {
            return Err(ValidationError::EmptyNameField("last"));
        }
        Ok(Self {
            id: ids.next_id(),
            name,
            dob,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    /// `"<first> <middle> <last>"`, with the middle segment (and its
    /// separating space) dropped when absent.
    pub fn formatted_name(&self) -> String {
        match &self.name.middle {
            Some(middle) => format!("{} {} {}", self.name.first, middle, self.name.last),
            None => format!("{} {}", self.name.first, self.name.last),
        }
    }
}
