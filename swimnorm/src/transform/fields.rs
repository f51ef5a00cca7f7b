//! Field-level cleanup and decomposition.
//!
//! Each function handles one column of the export; composite fields come
//! back as typed parts or a [`SchemaError`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SchemaError;

/// Characters the upstream export wraps values in (`="1:41.39"`).
static EXPORT_ARTIFACTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[="]"#).expect("artifact pattern is valid"));

/// Long stroke names and their short form, applied as plain substring replaces.
pub const STROKE_ABBREVIATIONS: [(&str, &str); 5] = [
    ("Butterfly", "Fly"),
    ("Backstroke", "Back"),
    ("Breaststroke", "Breast"),
    ("Freestyle", "Free"),
    ("Individual Medley", "IM"),
];

/// Remove every `=` and `"` from a value.
pub fn strip_artifacts(value: &str) -> String {
    EXPORT_ARTIFACTS.replace_all(value, "").into_owned()
}

/// Athlete name split around its comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub last: String,
    /// Everything after the comma, leading space included.
    pub first: String,
}

/// Split `"Last, First"` into its two halves without trimming either.
pub fn split_name(full_name: &str) -> Result<NameParts, SchemaError> {
    match full_name.split_once(',') {
        Some((last, first)) if !first.contains(',') => Ok(NameParts {
            last: last.to_string(),
            first: first.to_string(),
        }),
        _ => Err(SchemaError::NameFormat(full_name.to_string())),
    }
}

/// Shorten stroke names inside an event description.
pub fn abbreviate_strokes(description: &str) -> String {
    STROKE_ABBREVIATIONS
        .iter()
        .fold(description.to_string(), |desc, &(long, short)| {
            desc.replace(long, short)
        })
}

/// The four parts of an abbreviated event description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParts {
    pub distance: String,
    pub stroke: String,
    pub course: String,
    pub gender: String,
}

/// Split `"50 Free Finals M"` on single spaces into exactly four parts.
pub fn split_event(description: &str) -> Result<EventParts, SchemaError> {
    let tokens: Vec<&str> = description.split(' ').collect();
    match tokens.as_slice() {
        [distance, stroke, course, gender] => Ok(EventParts {
            distance: distance.to_string(),
            stroke: stroke.to_string(),
            course: course.to_string(),
            gender: gender.to_string(),
        }),
        _ => Err(SchemaError::EventFormat {
            description: description.to_string(),
            found: tokens.len(),
        }),
    }
}

/// Composite athlete/event key: `Last + ID_DOB + Distance + Stroke + Course`.
pub fn build_id(last: &str, id_dob: &str, event: &EventParts) -> String {
    [
        last,
        id_dob,
        event.distance.as_str(),
        event.stroke.as_str(),
        event.course.as_str(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_artifacts() {
        assert_eq!(strip_artifacts(r#"="1:41.39""#), "1:41.39");
        assert_eq!(strip_artifacts("Smith, John"), "Smith, John");
        assert_eq!(strip_artifacts(r#"a"=b"#), "ab");
    }

    #[test]
    fn test_strip_artifacts_idempotent() {
        for value in [r#"="1:41.39""#, r#""""#, "plain", r#"=="x"=="#] {
            let once = strip_artifacts(value);
            assert_eq!(strip_artifacts(&once), once);
        }
    }

    #[test]
    fn test_split_name_keeps_leading_space() {
        let parts = split_name("Smith, John").unwrap();
        assert_eq!(parts.last, "Smith");
        assert_eq!(parts.first, " John");
    }

    #[test]
    fn test_split_name_requires_one_comma() {
        assert_eq!(
            split_name("Cher").unwrap_err(),
            SchemaError::NameFormat("Cher".into())
        );
        assert!(split_name("Smith, Jr., John").is_err());
    }

    #[test]
    fn test_abbreviate_strokes() {
        assert_eq!(abbreviate_strokes("100 Butterfly Finals F"), "100 Fly Finals F");
        assert_eq!(abbreviate_strokes("100 Backstroke Finals M"), "100 Back Finals M");
        assert_eq!(abbreviate_strokes("200 Breaststroke Prelims F"), "200 Breast Prelims F");
        assert_eq!(abbreviate_strokes("50 Freestyle Finals M"), "50 Free Finals M");
        assert_eq!(abbreviate_strokes("400 Individual Medley Finals F"), "400 IM Finals F");
    }

    #[test]
    fn test_abbreviate_is_case_sensitive() {
        assert_eq!(abbreviate_strokes("50 freestyle Finals M"), "50 freestyle Finals M");
    }

    #[test]
    fn test_split_event() {
        let event = split_event(&abbreviate_strokes("50 Freestyle Finals M")).unwrap();
        assert_eq!(event.distance, "50");
        assert_eq!(event.stroke, "Free");
        assert_eq!(event.course, "Finals");
        assert_eq!(event.gender, "M");
    }

    #[test]
    fn test_split_event_wrong_token_count() {
        assert_eq!(
            split_event("50 Free Finals").unwrap_err(),
            SchemaError::EventFormat {
                description: "50 Free Finals".into(),
                found: 3
            }
        );
        // relay descriptions carry an extra word
        assert!(split_event("200 Free Relay Finals M").is_err());
        // double spaces produce an empty token
        assert!(split_event("50  Free Finals M").is_err());
    }

    #[test]
    fn test_build_id() {
        let event = EventParts {
            distance: "50".into(),
            stroke: "Free".into(),
            course: "Finals".into(),
            gender: "M".into(),
        };
        assert_eq!(build_id("Smith", "20000101", &event), "Smith2000010150FreeFinals");
    }
}
