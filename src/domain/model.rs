use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One input CSV row: an opaque identifier plus the raw serialized payload.
#[derive(Debug, Clone)]
pub struct Row {
    pub record_id: String,
    pub data_json: String,
}

/// One structured payload, a mapping from field name to JSON value.
///
/// Keys outside the recognized vocabulary pass through untouched. The map
/// is owned by exactly one processing step at a time; masking replaces
/// values in this working copy, never in shared state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

impl Record {
    pub fn new(fields: serde_json::Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Field value coerced to a string and trimmed. Missing fields and
    /// nulls coerce to the empty string, numbers and bools to their
    /// display form.
    pub fn text(&self, key: &str) -> String {
        self.raw_text(key).trim().to_string()
    }

    /// Coerced but untrimmed field value.
    pub fn raw_text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// JSON truthiness: null, false, 0, "" and empty containers are falsy.
    pub fn truthy(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.fields.insert(key.to_string(), Value::String(value));
    }

    /// Compact serialization, no extraneous whitespace.
    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

/// Quasi-identifier categories present in a record. Transient computation
/// result; PII-ness is decided by the processor, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFlags {
    pub name: bool,
    pub email: bool,
    pub address: bool,
    pub device: bool,
}

impl CategoryFlags {
    pub fn count(&self) -> usize {
        [self.name, self.email, self.address, self.device]
            .iter()
            .filter(|&&f| f)
            .count()
    }
}

/// One output row, ready to be written.
#[derive(Debug, Clone)]
pub struct RedactedRow {
    pub record_id: String,
    pub payload: String,
    pub is_pii: bool,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<RedactedRow>,
    pub pii_count: usize,
}
