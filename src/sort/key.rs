//! Sort keys and directions as closed enums.
//!
//! Every tag is mapped up front and unknown tags are rejected at the
//! boundary, so a bad key in a late layer cannot lie dormant until the
//! earlier keys happen to tie.

use crate::person::Person;
use chrono::Datelike;
use std::cmp::Ordering;
use thiserror::Error;

/// A sort specification named a tag this engine does not know.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortSpecError {
    #[error("sort on {0:?} not supported")]
    UnsupportedSortKey(String),
    #[error("sort direction {0:?} not supported (expected \"ascending\" or \"descending\")")]
    UnsupportedDirection(String),
}

/// Field a sort layer projects out of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Dob,
    DobYear,
    DobMonth,
    /// Day of month (1-31), not weekday.
    DobDay,
    FirstName,
    MiddleName,
    LastName,
}

impl SortKey {
    /// All recognized tags.
    pub const TAGS: [&'static str; 7] = [
        "dob",
        "dob_year",
        "dob_month",
        "dob_day",
        "first_name",
        "middle_name",
        "last_name",
    ];

    pub fn from_tag(tag: &str) -> Result<Self, SortSpecError> {
        match tag {
            "dob" => Ok(Self::Dob),
            "dob_year" => Ok(Self::DobYear),
            "dob_month" => Ok(Self::DobMonth),
            "dob_day" => Ok(Self::DobDay),
            "first_name" => Ok(Self::FirstName),
            "middle_name" => Ok(Self::MiddleName),
            "last_name" => Ok(Self::LastName),
            other => Err(SortSpecError::UnsupportedSortKey(other.to_string())),
        }
    }

    /// Compare two records on this key's projected value, ascending.
    /// Name fields use plain byte order; an absent middle name compares as
    /// the empty string.
    pub fn cmp_on(self, lhs: &Person, rhs: &Person) -> Ordering {
        match self {
            Self::Dob => lhs.dob().cmp(&rhs.dob()),
            Self::DobYear => lhs.dob().year().cmp(&rhs.dob().year()),
            Self::DobMonth => lhs.dob().month0().cmp(&rhs.dob().month0()),
            Self::DobDay => lhs.dob().day().cmp(&rhs.dob().day()),
            Self::FirstName => lhs.name().first.cmp(&rhs.name().first),
            Self::MiddleName => {
                let l = lhs.name().middle.as_deref().unwrap_or("");
                let r = rhs.name().middle.as_deref().unwrap_or("");
                l.cmp(r)
            }
            Self::LastName => lhs.name().last.cmp(&rhs.name().last),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_tag(tag: &str) -> Result<Self, SortSpecError> {
        match tag {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(SortSpecError::UnsupportedDirection(other.to_string())),
        }
    }

    /// Orient an ascending comparison.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}
