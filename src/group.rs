//! A group of people: aggregate queries, in-place multi-key sort, and the
//! fixed-width text report.

use crate::person::Person;
use crate::sort::{SortSpec, SortSpecError};
use serde::Serialize;

/// An ordered collection of person records. Order starts as insertion order;
/// `sort_by` is the only mutator.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Group {
    #[serde(rename = "group")]
    people: Vec<Person>,
}

impl Group {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The record with the latest date of birth, or `None` for an empty
    /// group. Ties go to the first such record in current order.
    pub fn youngest(&self) -> Option<&Person> {
        self.people
            .iter()
            .reduce(|best, next| if next.dob() > best.dob() { next } else { best })
    }

    /// The record with the earliest date of birth, or `None` for an empty
    /// group. Ties go to the first such record in current order.
    pub fn oldest(&self) -> Option<&Person> {
        self.people
            .iter()
            .reduce(|best, next| if next.dob() < best.dob() { next } else { best })
    }

    /// Re-order the group in place according to `spec`.
    ///
    /// The whole spec is compiled before anything moves, so a spec with an
    /// unknown tag leaves the order exactly as it was. Records that compare
    /// equal under every layer keep their prior relative order (stable sort).
    pub fn sort_by(&mut self, spec: &SortSpec) -> Result<(), SortSpecError> {
        let compiled = spec.compile()?;
        self.people.sort_by(|lhs, rhs| compiled.compare(lhs, rhs));
        Ok(())
    }

    /// One line per record in current order:
    ///
    /// `042) Ada King Lovelace   Sun Dec 10 1815`
    ///
    /// Ids are zero-padded to three digits; names are right-padded to the
    /// longest formatted name currently in the group (recomputed each call);
    /// a single space separates the name column from the date. Lines are
    /// joined by `\n` with no trailing newline; an empty group renders as
    /// the empty string.
    pub fn render(&self) -> String {
        let width = self
            .people
            .iter()
            .map(|p| p.formatted_name().len())
            .max()
            .unwrap_or(0);

        self.people
            .iter()
            .map(|p| {
                format!(
                    "{:03}) {:<width$} {}",
                    p.id(),
                    p.formatted_name(),
                    p.dob().format(crate::person::DISPLAY_FORMAT),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdAssigner;
    use crate::person::Name;
    use crate::sort::SortLayerSpec;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn person(ids: &IdAssigner, first: &str, dob: (i32, u32, u32)) -> Person {
        Person::new(
            Name {
                first: first.to_string(),
                middle: None,
                last: "Smith".to_string(),
            },
            NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
            ids,
        )
        .unwrap()
    }

    fn firsts(group: &Group) -> Vec<String> {
        group.people().iter().map(|p| p.name().first.clone()).collect()
    }

    #[test]
    fn youngest_and_oldest() {
        let ids = IdAssigner::new();
        let group = Group::new(vec![
            person(&ids, "Ann", (1990, 1, 1)),
            person(&ids, "Bob", (2000, 1, 1)),
            person(&ids, "Cyd", (1985, 6, 15)),
        ]);
        assert_eq!(group.youngest().unwrap().name().first, "Bob");
        assert_eq!(group.oldest().unwrap().name().first, "Cyd");
    }

    #[test]
    fn single_record_is_both_youngest_and_oldest() {
        let ids = IdAssigner::new();
        let group = Group::new(vec![person(&ids, "Ann", (1990, 1, 1))]);
        assert_eq!(group.youngest().unwrap().id(), 0);
        assert_eq!(group.oldest().unwrap().id(), 0);
    }

    #[test]
    fn empty_group_has_no_extremes_and_renders_empty() {
        let group = Group::new(vec![]);
        assert!(group.youngest().is_none());
        assert!(group.oldest().is_none());
        assert_eq!(group.render(), "");
    }

    #[test]
    fn sorts_descending() {
        let ids = IdAssigner::new();
        let mut group = Group::new(vec![
            person(&ids, "Bob", (2000, 1, 1)),
            person(&ids, "Ann", (2000, 1, 1)),
        ]);
        group
            .sort_by(&SortSpec::new(vec![SortLayerSpec::new(
                "first_name",
                "descending",
            )]))
            .unwrap();
        assert_eq!(firsts(&group), vec!["Bob", "Ann"]);
    }

    #[test]
    fn ties_cascade_to_the_next_layer() {
        let ids = IdAssigner::new();
        let mut group = Group::new(vec![
            person(&ids, "Ann", (2000, 1, 1)),
            person(&ids, "Ann", (1990, 1, 1)),
        ]);
        group
            .sort_by(&SortSpec::new(vec![
                SortLayerSpec::new("first_name", "ascending"),
                SortLayerSpec::new("dob", "ascending"),
            ]))
            .unwrap();
        let dobs: Vec<i32> = group
            .people()
            .iter()
            .map(|p| chrono::Datelike::year(&p.dob()))
            .collect();
        assert_eq!(dobs, vec![1990, 2000]);
    }

    #[test]
    fn resorting_a_sorted_group_changes_nothing() {
        let ids = IdAssigner::new();
        let mut group = Group::new(vec![
            person(&ids, "Cyd", (1985, 6, 15)),
            person(&ids, "Ann", (1990, 1, 1)),
            person(&ids, "Bob", (2000, 1, 1)),
        ]);
        let spec = SortSpec::new(vec![
            SortLayerSpec::new("first_name", "ascending"),
            SortLayerSpec::new("dob", "ascending"),
        ]);
        group.sort_by(&spec).unwrap();
        let once: Vec<u64> = group.people().iter().map(Person::id).collect();
        group.sort_by(&spec).unwrap();
        let twice: Vec<u64> = group.people().iter().map(Person::id).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn unsupported_key_fails_closed() {
        let ids = IdAssigner::new();
        let mut group = Group::new(vec![
            person(&ids, "Bob", (2000, 1, 1)),
            person(&ids, "Ann", (1990, 1, 1)),
        ]);
        let before = firsts(&group);
        let err = group
            .sort_by(&SortSpec::new(vec![SortLayerSpec::new(
                "nonsense",
                "ascending",
            )]))
            .unwrap_err();
        assert_eq!(err, SortSpecError::UnsupportedSortKey("nonsense".to_string()));
        assert_eq!(firsts(&group), before);
    }

    #[test]
    fn bad_key_behind_good_layers_still_fails_closed() {
        let ids = IdAssigner::new();
        let mut group = Group::new(vec![
            person(&ids, "Bob", (2000, 1, 1)),
            person(&ids, "Ann", (1990, 1, 1)),
        ]);
        let before = firsts(&group);
        assert!(
            group
                .sort_by(&SortSpec::new(vec![
                    SortLayerSpec::new("first_name", "ascending"),
                    SortLayerSpec::new("nonsense", "ascending"),
                ]))
                .is_err()
        );
        assert_eq!(firsts(&group), before);
    }

    #[test]
    fn renders_single_record_without_extra_padding() {
        let ids = IdAssigner::starting_at(3);
        let group = Group::new(vec![person(&ids, "Jo", (2001, 5, 6))]);
        // Width equals the record's own name length, so exactly one space
        // separates name and date.
        assert_eq!(group.render(), "003) Jo Smith Sun May 06 2001");
    }

    #[test]
    fn renders_aligned_columns_for_mixed_name_lengths() {
        let ids = IdAssigner::new();
        let long = Person::new(
            Name {
                first: "Ada".to_string(),
                middle: Some("King".to_string()),
                last: "Lovelace".to_string(),
            },
            NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            &ids,
        )
        .unwrap();
        let group = Group::new(vec![long, person(&ids, "Jo", (2001, 5, 6))]);
        assert_eq!(
            group.render(),
            "000) Ada King Lovelace Sun Dec 10 1815\n\
             001) Jo Smith          Sun May 06 2001"
        );
    }

    #[test]
    fn serializes_under_a_group_key() {
        let ids = IdAssigner::new();
        let group = Group::new(vec![person(&ids, "Jo", (2001, 5, 6))]);
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "group": [{
                    "id": 0,
                    "name": { "first": "Jo", "last": "Smith" },
                    "dob": "Sun May 06 2001",
                }]
            })
        );
    }
}
