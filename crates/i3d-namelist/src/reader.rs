//! Primary-format (`.i3d`) reader.
//!
//! ```text
//! ! comment
//! &BasicParam
//!   nx = 181        ! trailing comment
//!   sc(1) = 1.0
//! /End
//! ```

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{FormatError, FormatErrorKind};
use crate::value::{parse_scalar, RawValue};

/// Parsed `.i3d` document: sections in source order, each an ordered
/// `key → value` map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    sections: IndexMap<String, IndexMap<String, RawValue>>,
}

impl Document {
    /// Sections in source order. A section name repeated in the source is
    /// merged into its first occurrence.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &IndexMap<String, RawValue>)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries of one section, matched case-insensitively.
    pub fn section(&self, name: &str) -> Option<&IndexMap<String, RawValue>> {
        self.sections
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All entries in one ordered map. A key seen in several sections keeps
    /// its first position and its last value.
    pub fn into_flat(self) -> IndexMap<String, RawValue> {
        let mut flat = IndexMap::new();
        for (_, entries) in self.sections {
            flat.extend(entries);
        }
        flat
    }
}

/// Entries of the section being read. Indexed keys stay sparse until the
/// section closes.
#[derive(Default)]
pub(crate) struct PendingEntries {
    entries: IndexMap<String, Pending>,
}

enum Pending {
    Scalar(RawValue),
    Indexed(BTreeMap<usize, f64>),
}

impl PendingEntries {
    /// Record `key = value` read on a line. `key` may be indexed.
    pub(crate) fn insert(&mut self, key: &str, value: RawValue) -> Result<(), FormatErrorKind> {
        match split_index(key)? {
            None => {
                self.entries.insert(key.to_string(), Pending::Scalar(value));
            }
            Some((name, index)) => {
                let element = match value {
                    RawValue::Int(v) => v as f64,
                    RawValue::Float(v) => v,
                    other => {
                        return Err(FormatErrorKind::InvalidValue {
                            key: key.to_string(),
                            value: other.to_string(),
                        })
                    }
                };
                let slot = self
                    .entries
                    .entry(name.to_string())
                    .or_insert_with(|| Pending::Indexed(BTreeMap::new()));
                match slot {
                    Pending::Indexed(map) => {
                        map.insert(index, element);
                    }
                    scalar => *scalar = Pending::Indexed(BTreeMap::from([(index, element)])),
                }
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> IndexMap<String, RawValue> {
        self.entries
            .into_iter()
            .map(|(k, p)| {
                let v = match p {
                    Pending::Scalar(v) => v,
                    Pending::Indexed(map) => RawValue::List(map.into_values().collect()),
                };
                (k, v)
            })
            .collect()
    }
}

/// Split `name(i)` into `(name, i)`. Plain keys give `None`.
fn split_index(key: &str) -> Result<Option<(&str, usize)>, FormatErrorKind> {
    let Some(open) = key.find('(') else {
        return Ok(None);
    };
    let bad = || FormatErrorKind::BadIndex {
        key: key.to_string(),
    };
    let inner = key[open + 1..].strip_suffix(')').ok_or_else(bad)?;
    let name = key[..open].trim_end();
    if name.is_empty() {
        return Err(FormatErrorKind::EmptyKey);
    }
    match inner.trim().parse::<usize>() {
        Ok(index) if index >= 1 => Ok(Some((name, index))),
        _ => Err(bad()),
    }
}

/// Text before the first `marker` that is not inside quotes.
pub(crate) fn strip_comment(line: &str, marker: char) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, '\'' | '"') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, c) if c == marker => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse `.i3d` text.
pub fn parse_i3d(text: &str) -> Result<Document, FormatError> {
    let mut doc = Document::default();
    let mut open: Option<(String, usize, PendingEntries)> = None;

    for (i, raw_line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = strip_comment(raw_line, '!').trim();
        if line.is_empty() {
            continue;
        }
        let err = |section: Option<&str>, kind: FormatErrorKind| FormatError {
            line: line_no,
            section: section.map(str::to_string),
            kind,
        };

        if let Some(name) = line.strip_prefix('&') {
            let name = name.trim();
            let current = open.as_ref().map(|(open_name, _, _)| open_name.as_str());
            if name.is_empty() {
                return Err(err(current, FormatErrorKind::MissingSectionName));
            }
            if current.is_some() {
                return Err(err(
                    current,
                    FormatErrorKind::NestedSection {
                        name: name.to_string(),
                    },
                ));
            }
            open = Some((name.to_string(), line_no, PendingEntries::default()));
            continue;
        }

        if line.eq_ignore_ascii_case("/end") || line == "/" {
            match open.take() {
                Some((name, _, pending)) => {
                    doc.sections.entry(name).or_default().extend(pending.finish());
                }
                None => return Err(err(None, FormatErrorKind::UnexpectedEnd)),
            }
            continue;
        }

        let Some((name, _, pending)) = open.as_mut() else {
            return Err(err(None, FormatErrorKind::OutsideSection));
        };
        let current = Some(name.as_str());
        let Some((key, value)) = line.split_once('=') else {
            return Err(err(current, FormatErrorKind::MissingEquals));
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() {
            return Err(err(current, FormatErrorKind::EmptyKey));
        }
        let value = parse_scalar(value).ok_or_else(|| {
            err(
                current,
                FormatErrorKind::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                },
            )
        })?;
        pending
            .insert(key, value)
            .map_err(|kind| err(current, kind))?;
    }

    match open {
        Some((name, line, _)) => Err(FormatError {
            line,
            section: Some(name.clone()),
            kind: FormatErrorKind::UnterminatedSection { name },
        }),
        None => Ok(doc),
    }
}
