use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One answered question from the form provider. `value` arrives in several
/// shapes (scalar, list of option ids, signature/file objects), so it stays
/// a `serde_json::Value` until resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    #[serde(default)]
    pub label: Option<String>,
    pub id: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub options: Option<Vec<FieldOption>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldOption {
    pub id: String,
    pub text: String,
}

/// Field label (or id) → resolved answer. Built fresh per webhook call.
pub type AnswerMap = HashMap<String, Option<String>>;

impl RawField {
    /// The key this field contributes to the answer map.
    pub fn key(&self) -> &str {
        match &self.label {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }

    fn option_text(&self, id: &str) -> Option<&str> {
        self.options
            .as_deref()?
            .iter()
            .find(|opt| opt.id == id)
            .map(|opt| opt.text.as_str())
    }
}

/// Resolve one field into a human-readable string.
///
/// Lists are resolved element-wise and joined with ", ". String elements are
/// treated as option ids and replaced by the option text when one matches;
/// objects contribute their `url`, then `text`, then their JSON form.
pub fn readable_value(field: &RawField) -> Option<String> {
    let value = field.value.as_ref()?;

    match value {
        Value::Null => None,
        Value::Array(items) => {
            let resolved: Vec<String> = items.iter().map(|v| resolve_element(field, v)).collect();
            Some(resolved.join(", "))
        }
        Value::String(s) => Some(
            field
                .option_text(s)
                .map(|t| t.to_string())
                .unwrap_or_else(|| s.clone()),
        ),
        Value::Object(obj) => {
            if let Some(url) = obj.get("url").and_then(|v| v.as_str()) {
                return Some(url.to_string());
            }
            if let Some(text) = obj.get("text").and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
            if let Some(id) = obj.get("id").and_then(|v| v.as_str()) {
                return Some(
                    field
                        .option_text(id)
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| id.to_string()),
                );
            }
            // No url/text/id: keep the raw value in its JSON form, as the
            // array branch does.
            Some(value.to_string())
        }
        other => Some(scalar_to_string(other)),
    }
}

fn resolve_element(field: &RawField, value: &Value) -> String {
    match value {
        Value::String(s) => field
            .option_text(s)
            .map(|t| t.to_string())
            .unwrap_or_else(|| s.clone()),
        Value::Object(obj) => {
            if let Some(url) = obj.get("url").and_then(|v| v.as_str()) {
                url.to_string()
            } else if let Some(text) = obj.get("text").and_then(|v| v.as_str()) {
                text.to_string()
            } else {
                value.to_string()
            }
        }
        other => scalar_to_string(other),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Run the normalizer over the full field list. Keyed by label, falling back
/// to id; a later field with a duplicate key overwrites the earlier one.
pub fn parse_answers(fields: &[RawField]) -> AnswerMap {
    let mut answers = AnswerMap::new();
    for field in fields {
        answers.insert(field.key().to_string(), readable_value(field));
    }
    answers
}

/// Non-empty lookup: `Some` only when the key resolved to a non-empty string.
pub fn answer<'a>(answers: &'a AnswerMap, key: &str) -> Option<&'a str> {
    answers
        .get(key)
        .and_then(|v| v.as_deref())
        .filter(|s| !s.is_empty())
}
