//! Redaction of sensitive log field values.

use serde_json::{Map, Value};
use std::collections::HashMap;

pub(crate) const REDACTED: &str = "[REDACTED]";

const DENYLIST_KEYS: [&str; 5] = ["authorization", "token", "password", "secret", "cookie"];

/// Replace the values of sensitive keys, recursing into nested objects.
pub(crate) fn redact_fields(fields: &mut HashMap<String, Value>) {
    for (key, value) in fields.iter_mut() {
        *value = redact_value(key, value);
    }
}

fn redact_value(key: &str, value: &Value) -> Value {
    if is_sensitive_key(key) {
        return Value::String(REDACTED.to_string());
    }

    match value {
        Value::String(s) if looks_like_credential(s) => Value::String(REDACTED.to_string()),
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                out.insert(k.clone(), redact_value(k, v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(|v| redact_value(key, v)).collect()),
        _ => value.clone(),
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    DENYLIST_KEYS.iter().any(|entry| lower.contains(entry))
}

fn looks_like_credential(raw: &str) -> bool {
    let trimmed = raw.trim_matches('"');
    trimmed.to_ascii_lowercase().starts_with("bearer ")
        || (trimmed.matches('.').count() == 2 && trimmed.len() > 40 && !trimmed.contains(' '))
}
