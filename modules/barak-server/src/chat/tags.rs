use serde::Serialize;
use serde_json::Value;

use super::criteria::{present, SearchCriteria};

/// A short display label summarizing one extracted criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartTag {
    pub text: String,
}

impl SmartTag {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Map each provided criterion to its display tags, in record field order.
/// `action` never becomes a tag; `features` expands to one tag per entry at
/// the position the field occupies.
pub fn generate_tags(criteria: &SearchCriteria) -> Vec<SmartTag> {
    let mut tags = Vec::new();

    if let Some(location) = present(&criteria.location) {
        tags.push(SmartTag::new(generic_tag(location)));
    }
    if let Some(property_type) = present(&criteria.property_type) {
        tags.push(SmartTag::new(property_type_tag(property_type)));
    }
    if let Some(rooms) = present(&criteria.rooms) {
        tags.push(SmartTag::new(rooms_tag(rooms)));
    }
    if let Some(budget) = present(&criteria.budget) {
        tags.push(SmartTag::new(budget_tag(budget)));
    }
    if let Some(features) = present(&criteria.features) {
        tags.extend(feature_tags(features));
    }

    tags
}

/// Tag texts joined for the confirmation message.
pub fn summary(tags: &[SmartTag]) -> String {
    tags.iter()
        .map(|tag| tag.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn property_type_tag(value: &Value) -> String {
    let raw = value_text(value);
    match raw.to_lowercase().as_str() {
        "apartment" => "Appartement".to_string(),
        "house" => "Maison".to_string(),
        _ => capitalize(&raw),
    }
}

fn budget_tag(value: &Value) -> String {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.replace([' ', '€'], "").parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(amount) => format!("{}€", format_thousands(amount)),
        // Unparseable budgets fall back to the raw value, verbatim.
        None => value_text(value),
    }
}

fn rooms_tag(value: &Value) -> String {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) => format!("{n} pièces"),
        None => value_text(value),
    }
}

fn feature_tags(value: &Value) -> Vec<SmartTag> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(SmartTag::new(capitalize(s))),
                _ => None,
            })
            .collect(),
        // A model sometimes returns a single string instead of an array.
        Value::String(s) if !s.trim().is_empty() => vec![SmartTag::new(capitalize(s))],
        _ => Vec::new(),
    }
}

/// Rule for fields with no dedicated formatting (location today): strings
/// are capitalized, anything else is rendered as text as-is.
fn generic_tag(value: &Value) -> String {
    match value {
        Value::String(s) => capitalize(s),
        other => other.to_string(),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Integer formatting with a space every three digits: 250000 → "250 000".
fn format_thousands(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
