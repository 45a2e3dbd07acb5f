//! Legacy `.prm` reader.
//!
//! One parameter per line, value first and key after a `#`:
//!
//! ```text
//! # comment line
//! 181      #nx
//! 18.      #xlx   # domain length
//! 2        #nclx
//! ```
//!
//! Keys are renamed to their current names through [`legacy_names`]. Keys
//! with no current counterpart are dropped.

use indexmap::IndexMap;
use tracing::debug;

use i3d_core::Registry;

use crate::error::{FormatError, FormatErrorKind};
use crate::reader::{strip_comment, PendingEntries};
use crate::value::{parse_scalar, RawValue};

/// Renamed legacy keys. A key absent here maps to itself when the registry
/// knows it as a grouped field.
const RENAMED: &[(&str, &[&str])] = &[
    ("noise", &["init_noise"]),
    ("noise1", &["inflow_noise"]),
    ("nscheme", &["itimescheme"]),
    ("isave", &["icheckpoint"]),
    ("imodulo", &["ioutput"]),
    ("ivirt", &["iibm"]),
    ("jLES", &["jles"]),
    ("ilit", &["irestart"]),
    ("nclx", &["nclx1", "nclxn"]),
    ("ncly", &["ncly1", "nclyn"]),
    ("nclz", &["nclz1", "nclzn"]),
];

/// Current names for a legacy key. Empty if the key has no counterpart.
pub fn legacy_names(key: &str) -> Vec<&'static str> {
    if let Some((_, names)) = RENAMED.iter().find(|(old, _)| *old == key) {
        return names.to_vec();
    }
    match Registry::standard().describe(key) {
        Ok(d) if d.is_grouped() => vec![d.name],
        _ => Vec::new(),
    }
}

/// Parse `.prm` text into a flat mapping under current names, in source
/// order.
pub fn parse_prm(text: &str) -> Result<IndexMap<String, RawValue>, FormatError> {
    let mut pending = PendingEntries::default();

    for (i, raw_line) in text.lines().enumerate() {
        let err = |kind| FormatError {
            line: i + 1,
            section: None,
            kind,
        };
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value = strip_comment(line, '#');
        let Some(rest) = line[value.len()..].strip_prefix('#') else {
            return Err(err(FormatErrorKind::MalformedLegacyLine));
        };
        let value = value.trim();
        let key = rest.split('#').next().unwrap_or_default().trim();
        if key.is_empty() {
            return Err(err(FormatErrorKind::EmptyKey));
        }
        let parsed = parse_scalar(value).ok_or_else(|| {
            err(FormatErrorKind::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            })
        })?;
        pending.insert(key, parsed).map_err(err)?;
    }

    let mut out = IndexMap::new();
    for (key, value) in pending.finish() {
        let names = legacy_names(&key);
        if names.is_empty() {
            debug!(key = %key, "legacy key has no current counterpart, skipped");
            continue;
        }
        for name in names {
            out.insert(name.to_string(), value.clone());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_and_identity() {
        assert_eq!(legacy_names("nscheme"), ["itimescheme"]);
        assert_eq!(legacy_names("nclx"), ["nclx1", "nclxn"]);
        assert_eq!(legacy_names("nx"), ["nx"]);
        assert!(legacy_names("dx").is_empty(), "derived fields are not grouped");
        assert!(legacy_names("bogus").is_empty());
    }

    #[test]
    fn reads_values_and_expands_axes() {
        let map = parse_prm(
            "# Flow parameters\n\
             \n\
             181      #nx\n\
             18.      #xlx   # domain length\n\
             0        #nclx\n\
             2        #nscheme\n\
             .true.   #ilmn\n\
             1.0      #sc(1)\n\
             0.5      #sc(2)\n\
             7        #unknown_key\n",
        )
        .unwrap();
        assert_eq!(map["nx"], RawValue::Int(181));
        assert_eq!(map["xlx"], RawValue::Float(18.0));
        assert_eq!(map["nclx1"], RawValue::Int(0));
        assert_eq!(map["nclxn"], RawValue::Int(0));
        assert_eq!(map["itimescheme"], RawValue::Int(2));
        assert_eq!(map["ilmn"], RawValue::Bool(true));
        assert_eq!(map["sc"], RawValue::List(vec![1.0, 0.5]));
        assert!(!map.contains_key("unknown_key"));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["nx", "xlx", "nclx1", "nclxn", "itimescheme", "ilmn", "sc"]
        );
    }

    #[test]
    fn hash_inside_quotes_belongs_to_the_value() {
        let map = parse_prm("'run #2'   #nx   # label\n\"a#b\" #ny\n").unwrap();
        assert_eq!(map["nx"], RawValue::Str("run #2".into()));
        assert_eq!(map["ny"], RawValue::Str("a#b".into()));

        let e = parse_prm("'open #nx\n").unwrap_err();
        assert_eq!(e.kind, FormatErrorKind::MalformedLegacyLine);
    }

    #[test]
    fn malformed_lines() {
        let e = parse_prm("181 #nx\n181\n").unwrap_err();
        assert_eq!((e.line, e.kind), (2, FormatErrorKind::MalformedLegacyLine));

        let e = parse_prm("181 #  \n").unwrap_err();
        assert_eq!(e.kind, FormatErrorKind::EmptyKey);

        let e = parse_prm("x1 #nx\n").unwrap_err();
        assert_eq!(
            e.kind,
            FormatErrorKind::InvalidValue {
                key: "nx".into(),
                value: "x1".into()
            }
        );
    }
}
