//! Skill Normalizer — collapses the "skills may be a string or a list" shapes
//! that come out of CSV cells and LLM JSON into one canonical token sequence.

use serde_json::Value;

use crate::matching::MatchError;

/// The raw shape of a skills field at the system boundary.
///
/// Upstream sources are loose about this: the extraction service returns a
/// JSON array, older CSV exports hold a comma-delimited string, and the field
/// may be missing entirely. Everything downstream of `normalize` only ever
/// sees `Vec<String>`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSkills {
    Text(String),
    List(Vec<String>),
    Missing,
}

impl RawSkills {
    /// Classifies an untrusted JSON value. Only a string, an array of
    /// strings, or null/absent are acceptable; anything else (a number, an
    /// object, a mixed array) is a caller error.
    pub fn from_json(value: &Value) -> Result<Self, MatchError> {
        match value {
            Value::Null => Ok(RawSkills::Missing),
            Value::String(s) => Ok(RawSkills::Text(s.clone())),
            Value::Array(items) => {
                let mut skills = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => skills.push(s.clone()),
                        other => {
                            return Err(MatchError::InvalidInputKind {
                                found: json_kind(other),
                            })
                        }
                    }
                }
                Ok(RawSkills::List(skills))
            }
            other => Err(MatchError::InvalidInputKind {
                found: json_kind(other),
            }),
        }
    }
}

impl From<&str> for RawSkills {
    fn from(s: &str) -> Self {
        RawSkills::Text(s.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Produces the canonical skill token sequence: comma-split (for the string
/// shape), whitespace-trimmed, empties dropped. Duplicates are preserved on
/// purpose — a skill mentioned twice counts twice at weighting time. Display
/// case is preserved; comparison happens lowercased inside the vectorizer.
pub fn normalize(raw: &RawSkills) -> Vec<String> {
    match raw {
        RawSkills::Text(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        RawSkills::List(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        RawSkills::Missing => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comma_string_is_split_and_trimmed() {
        let skills = normalize(&RawSkills::from("python,  sql , excel"));
        assert_eq!(skills, vec!["python", "sql", "excel"]);
    }

    #[test]
    fn test_list_shape_is_trimmed() {
        let raw = RawSkills::List(vec!["  Figma ".to_string(), "Sketch".to_string()]);
        assert_eq!(normalize(&raw), vec!["Figma", "Sketch"]);
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        let skills = normalize(&RawSkills::from("sql,, ,excel,"));
        assert_eq!(skills, vec!["sql", "excel"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let skills = normalize(&RawSkills::from("sql, sql, python"));
        assert_eq!(skills, vec!["sql", "sql", "python"]);
    }

    #[test]
    fn test_display_case_is_preserved() {
        let skills = normalize(&RawSkills::from("PyTorch, SQL"));
        assert_eq!(skills, vec!["PyTorch", "SQL"]);
    }

    #[test]
    fn test_missing_normalizes_to_empty() {
        assert!(normalize(&RawSkills::Missing).is_empty());
        assert!(normalize(&RawSkills::from("")).is_empty());
    }

    #[test]
    fn test_tokens_are_never_empty_or_padded() {
        let skills = normalize(&RawSkills::from("  a , b b ,  , c  "));
        for token in &skills {
            assert!(!token.is_empty());
            assert_eq!(token, token.trim());
        }
    }

    #[test]
    fn test_json_null_is_missing() {
        assert_eq!(
            RawSkills::from_json(&Value::Null).unwrap(),
            RawSkills::Missing
        );
    }

    #[test]
    fn test_json_string_and_array_accepted() {
        assert_eq!(
            RawSkills::from_json(&json!("sql, excel")).unwrap(),
            RawSkills::Text("sql, excel".to_string())
        );
        assert_eq!(
            RawSkills::from_json(&json!(["sql", "excel"])).unwrap(),
            RawSkills::List(vec!["sql".to_string(), "excel".to_string()])
        );
    }

    #[test]
    fn test_json_number_is_rejected() {
        let err = RawSkills::from_json(&json!(42)).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidInputKind { found: "number" }
        ));
    }

    #[test]
    fn test_json_mixed_array_is_rejected() {
        let err = RawSkills::from_json(&json!(["sql", 7])).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidInputKind { found: "number" }
        ));
    }
}
