//! Date-of-birth string handling.
//!
//! Dates cross the JSON boundary as strings. On the way out we always write
//! the locale-stable calendar form `"Sun May 06 2001"`; on the way in we
//! accept that form or ISO `2001-05-06`, so a written file can be fed back
//! as input unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer, de};

/// Rendered form, e.g. "Sun May 06 2001".
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in either accepted form.
pub fn parse_dob(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, DISPLAY_FORMAT))
}

pub fn serialize<S: Serializer>(dob: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
    ser.collect_str(&dob.format(DISPLAY_FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
    let s = String::deserialize(de)?;
    parse_dob(&s).map_err(|e| de::Error::custom(format!("bad date {:?}: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_iso_and_display_forms() {
        let expected = NaiveDate::from_ymd_opt(2001, 5, 6).unwrap();
        assert_eq!(parse_dob("2001-05-06").unwrap(), expected);
        assert_eq!(parse_dob("Sun May 06 2001").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_dob("yesterday").is_err());
    }

    #[test]
    fn display_form_round_trips() {
        let d = NaiveDate::from_ymd_opt(1990, 12, 31).unwrap();
        let s = d.format(DISPLAY_FORMAT).to_string();
        assert_eq!(parse_dob(&s).unwrap(), d);
    }
}
