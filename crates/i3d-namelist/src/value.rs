//! Raw namelist values and their text forms.

use std::fmt;

use i3d_core::FieldValue;

/// A value as read from a namelist, before it is checked against the schema.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// Integer literal.
    Int(i64),
    /// Real literal.
    Float(f64),
    /// Logical literal.
    Bool(bool),
    /// Quoted string, stored without quotes.
    Str(String),
    /// Indexed entries `key(1)`, `key(2)`, ... in ascending index order.
    List(Vec<f64>),
}

impl From<RawValue> for FieldValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Int(v) => FieldValue::Int(v),
            RawValue::Float(v) => FieldValue::Float(v),
            RawValue::Bool(v) => FieldValue::Bool(v),
            RawValue::Str(v) => FieldValue::Str(v),
            RawValue::List(v) => FieldValue::FloatList(v),
        }
    }
}

impl From<&FieldValue> for RawValue {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Int(v) => RawValue::Int(*v),
            FieldValue::Float(v) => RawValue::Float(*v),
            FieldValue::Bool(v) => RawValue::Bool(*v),
            FieldValue::Str(v) => RawValue::Str(v.clone()),
            FieldValue::FloatList(v) => RawValue::List(v.clone()),
        }
    }
}

/// Parse a scalar literal. Returns `None` if the text is not a quoted
/// string, logical, integer or real.
///
/// Logicals accept `.true.`/`.false.`/`.t.`/`.f.` in any case; reals accept
/// a Fortran `d` exponent.
pub fn parse_scalar(text: &str) -> Option<RawValue> {
    let text = text.trim();
    if let Some(inner) = unquote(text) {
        return Some(RawValue::Str(inner.to_string()));
    }
    match text.to_ascii_lowercase().as_str() {
        ".true." | ".t." => return Some(RawValue::Bool(true)),
        ".false." | ".f." => return Some(RawValue::Bool(false)),
        _ => {}
    }
    if is_integer(text) {
        return text.parse().ok().map(RawValue::Int);
    }
    if is_real(text) {
        let normalized = text.replace(['d', 'D'], "e");
        return normalized.parse().ok().map(RawValue::Float);
    }
    None
}

fn unquote(text: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|q| {
        text.strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
            .filter(|_| text.len() >= 2)
    })
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_real(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E' | b'd' | b'D'))
}

/// Canonical text for one real: shortest round-trip form, always with a
/// decimal point or exponent.
pub fn format_real(v: f64) -> String {
    format!("{v:?}")
}

impl fmt::Display for RawValue {
    /// Namelist literal form. Lists render their elements comma-separated;
    /// the writer expands them into indexed entries instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_real(*v)),
            Self::Bool(true) => f.write_str(".true."),
            Self::Bool(false) => f.write_str(".false."),
            Self::Str(v) => write!(f, "'{v}'"),
            Self::List(v) => {
                let parts: Vec<String> = v.iter().map(|x| format_real(*x)).collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}
