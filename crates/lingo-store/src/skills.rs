//! Ordering a document's `skills` list.

use std::cmp::Ordering;

use serde_json::Value;

use lingo_types::JsonKind;

use crate::error::{StoreError, StoreResult};

/// Stable-sort the top-level `skills` array by each entry's `name`.
///
/// Returns the number of entries sorted; documents without `skills` are left
/// alone and report zero. `language` only labels errors.
pub fn sort_skills(language: &str, document: &mut Value) -> StoreResult<usize> {
    let Some(skills) = document.get_mut("skills") else {
        return Ok(0);
    };

    let kind = JsonKind::of(skills);
    let Some(entries) = skills.as_array_mut() else {
        return Err(StoreError::MalformedSkills {
            language: language.to_string(),
            reason: format!("skills is {kind}, expected an array"),
        });
    };

    if let Some(index) = entries.iter().position(|e| skill_name(e).is_none()) {
        return Err(StoreError::MalformedSkills {
            language: language.to_string(),
            reason: format!("skills[{index}] has no string name"),
        });
    }

    entries.sort_by(|a, b| match (skill_name(a), skill_name(b)) {
        (Some(a), Some(b)) => a.cmp(b),
        _ => Ordering::Equal,
    });
    Ok(entries.len())
}

fn skill_name(entry: &Value) -> Option<&str> {
    entry.get("name").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorts_by_name() {
        let mut doc = json!({"skills": [
            {"name": "Rust", "level": "Master"},
            {"name": "C", "level": "Good"},
            {"name": "Python"}
        ]});
        assert_eq!(sort_skills("en", &mut doc).unwrap(), 3);
        let names: Vec<&str> = doc["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["C", "Python", "Rust"]);
    }

    #[test]
    fn sort_is_stable() {
        let mut doc = json!({"skills": [
            {"name": "B", "id": 1},
            {"name": "A", "id": 2},
            {"name": "B", "id": 3},
            {"name": "A", "id": 4}
        ]});
        sort_skills("en", &mut doc).unwrap();
        let ids: Vec<i64> = doc["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [2, 4, 1, 3]);
    }

    #[test]
    fn missing_skills_is_untouched() {
        let mut doc = json!({"basics": {}});
        assert_eq!(sort_skills("en", &mut doc).unwrap(), 0);
        assert_eq!(doc, json!({"basics": {}}));
    }

    #[test]
    fn skills_must_be_an_array() {
        let err = sort_skills("fr", &mut json!({"skills": {"name": "x"}})).unwrap_err();
        match err {
            StoreError::MalformedSkills { language, reason } => {
                assert_eq!(language, "fr");
                assert_eq!(reason, "skills is object, expected an array");
            }
            other => panic!("expected MalformedSkills, got {other:?}"),
        }
    }

    #[test]
    fn entries_need_a_string_name() {
        let mut doc = json!({"skills": [{"name": "A"}, {"name": 3}]});
        let err = sort_skills("en", &mut doc).unwrap_err();
        assert!(matches!(err, StoreError::MalformedSkills { ref reason, .. } if reason == "skills[1] has no string name"));
        assert_eq!(doc, json!({"skills": [{"name": "A"}, {"name": 3}]}));
    }
}
