use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::core::{Formatter, StyleMap};

pub type OptionMap = IndexMap<String, OptionValue>;

/// Largest magnitude below which every integral `f64` is exactly an `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Configuration tree produced by the renderer.
///
/// Mirrors the JSON data model plus [`OptionValue::Expr`], which holds a
/// formatter that is written to the output unquoted.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Expr(Formatter),
    Array(Vec<OptionValue>),
    Object(OptionMap),
}

impl OptionValue {
    /// Numeric value; integral inputs become JSON integers and non-finite
    /// inputs become `null`.
    #[must_use]
    pub fn number(value: f64) -> Self {
        if !value.is_finite() {
            return Self::Null;
        }
        if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
            return Self::Number(Number::from(value as i64));
        }
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }

    #[must_use]
    pub fn object() -> Self {
        Self::Object(OptionMap::new())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Converts to a plain JSON value. Expressions become strings.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Number(value) => Value::Number(value.clone()),
            Self::String(value) => Value::String(value.clone()),
            Self::Expr(formatter) => Value::String(formatter.expression().to_owned()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json_value).collect()),
            Self::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json_value()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }

    /// Encodes the tree as JSON text with expressions passed through raw.
    #[must_use]
    pub fn encode(&self, pretty: bool) -> String {
        let mut out = String::new();
        self.write(&mut out, pretty.then_some(0));
        out
    }

    fn write(&self, out: &mut String, depth: Option<usize>) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
            Self::Number(value) => out.push_str(&value.to_string()),
            Self::String(value) => write_escaped(out, value),
            Self::Expr(formatter) => out.push_str(formatter.expression()),
            Self::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    write_break(out, depth.map(|d| d + 1));
                    item.write(out, depth.map(|d| d + 1));
                }
                write_break(out, depth);
                out.push(']');
            }
            Self::Object(map) => {
                if map.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push('{');
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    write_break(out, depth.map(|d| d + 1));
                    write_escaped(out, key);
                    out.push(':');
                    if depth.is_some() {
                        out.push(' ');
                    }
                    value.write(out, depth.map(|d| d + 1));
                }
                write_break(out, depth);
                out.push('}');
            }
        }
    }
}

fn write_break(out: &mut String, depth: Option<usize>) {
    if let Some(depth) = depth {
        out.push('\n');
        for _ in 0..depth {
            out.push_str("  ");
        }
    }
}

fn write_escaped(out: &mut String, value: &str) {
    // `Value`'s Display is infallible and applies JSON string escaping.
    out.push_str(&Value::from(value).to_string());
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<usize> for OptionValue {
    fn from(value: usize) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&Formatter> for OptionValue {
    fn from(value: &Formatter) -> Self {
        Self::Expr(value.clone())
    }
}

impl From<&StyleMap> for OptionValue {
    fn from(value: &StyleMap) -> Self {
        Self::Object(
            value
                .iter()
                .map(|(property, css)| (property.clone(), Self::from(css.as_str())))
                .collect(),
        )
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(value: Vec<OptionValue>) -> Self {
        Self::Array(value)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(value: OptionMap) -> Self {
        Self::Object(value)
    }
}

impl<T> From<Option<T>> for OptionValue
where
    T: Into<OptionValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
