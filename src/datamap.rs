//! Declarative field mapper
//! Projects and renames JSON object fields through small mapping tables,
//! with scalar coercions applied per field

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Scalar coercion applied to a source value before assignment
#[derive(Clone, Copy)]
enum Coerce {
    None,
    Bool,
    Number,
    Epoch,
}

/// A single source-key to target-key rule
#[derive(Clone)]
pub struct FieldRule {
    target: &'static str,
    coerce: Coerce,
    optional: bool,
    transform: Option<fn(&Value) -> Value>,
}

/// Start a rule mapping a source key onto `target`
pub fn to(target: &'static str) -> FieldRule {
    FieldRule {
        target,
        coerce: Coerce::None,
        optional: false,
        transform: None,
    }
}

impl FieldRule {
    /// Omit the pair when the source key is absent instead of warning
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Coerce to a strict boolean (`"true"`, `"1"`, `1`, `true` all map to true)
    pub fn bool(mut self) -> Self {
        self.coerce = Coerce::Bool;
        self
    }

    /// Coerce numeric strings to numbers
    pub fn number(mut self) -> Self {
        self.coerce = Coerce::Number;
        self
    }

    /// Parse a Unix timestamp into an RFC 3339 UTC string
    pub fn epoch(mut self) -> Self {
        self.coerce = Coerce::Epoch;
        self
    }

    /// Apply an arbitrary transform to the source value
    pub fn with(mut self, f: fn(&Value) -> Value) -> Self {
        self.transform = Some(f);
        self
    }

    fn apply(&self, value: &Value) -> Value {
        let value = match self.transform {
            Some(f) => f(value),
            None => value.clone(),
        };
        match self.coerce {
            Coerce::None => value,
            Coerce::Bool => Value::Bool(coerce_bool(&value)),
            Coerce::Number => coerce_number(&value),
            Coerce::Epoch => coerce_epoch(&value),
        }
    }
}

/// An ordered mapping table applied to one JSON object
#[derive(Clone, Default)]
pub struct Mapping {
    fields: Vec<(&'static str, FieldRule)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `source`; declaration order is output key order
    pub fn field(mut self, source: &'static str, rule: FieldRule) -> Self {
        self.fields.push((source, rule));
        self
    }

    /// Project `item` through the table.
    ///
    /// Absent optional keys are silently skipped. Absent required keys are
    /// skipped too (upstream omissions must not break mapping) but logged,
    /// since they indicate the caller violated the adapter's precondition.
    pub fn run(&self, item: &Value) -> Map<String, Value> {
        let mut out = Map::new();
        for (source, rule) in &self.fields {
            match item.get(source) {
                Some(value) if !value.is_null() => {
                    out.insert(rule.target.to_string(), rule.apply(value));
                }
                _ => {
                    if !rule.optional {
                        log::warn!("missing required source key '{}'", source);
                    }
                }
            }
        }
        out
    }
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().unwrap_or(0.0) != 0.0,
        Value::String(s) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1"
        }
        _ => false,
    }
}

fn coerce_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Value::from(n);
            }
            if let Ok(n) = s.parse::<f64>() {
                return Value::from(n);
            }
            value.clone()
        }
        _ => value.clone(),
    }
}

fn coerce_epoch(value: &Value) -> Value {
    let secs = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match secs.and_then(|s| DateTime::<Utc>::from_timestamp(s, 0)) {
        Some(dt) => Value::String(dt.to_rfc3339()),
        // Unparseable timestamps pass through untouched
        None => value.clone(),
    }
}
