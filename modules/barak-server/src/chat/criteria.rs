use ai_client::strip_code_blocks;
use serde::Deserialize;
use serde_json::Value;

/// Structured search criteria extracted from a free-text query by the model.
///
/// Every field tolerates arbitrary JSON — the model's output is untrusted,
/// so typing a field as `String` or `u32` would turn a sloppy completion
/// into a parse failure for the whole record. Unknown keys are ignored,
/// missing keys are absent. Request-scoped: never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub property_type: Option<Value>,
    #[serde(default)]
    pub rooms: Option<Value>,
    #[serde(default)]
    pub budget: Option<Value>,
    #[serde(default)]
    pub features: Option<Value>,
}

impl SearchCriteria {
    /// The `action` field normalized for classification: lower-cased and
    /// trimmed. `None` when absent, empty, or not a string.
    pub fn normalized_action(&self) -> Option<String> {
        match self.action.as_ref() {
            Some(Value::String(s)) => {
                let normalized = s.trim().to_lowercase();
                (!normalized.is_empty()).then_some(normalized)
            }
            _ => None,
        }
    }
}

/// True when a field value counts as "not provided": null, an empty or
/// whitespace-only string, or an empty array.
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// A field's value, filtered through the absence rules above.
pub fn present(field: &Option<Value>) -> Option<&Value> {
    field.as_ref().filter(|v| !is_absent(v))
}

/// Parse the model's raw reply into a criteria record.
///
/// Strips code fencing first, then requires a JSON object. `None` on
/// malformed JSON or a non-object value (bare array, scalar) — parse
/// problems must never propagate past this boundary.
pub fn parse_criteria(raw: &str) -> Option<SearchCriteria> {
    let sanitized = strip_code_blocks(raw);
    serde_json::from_str(sanitized).ok()
}
