//! Primary-format (`.i3d`) writer.

use std::fmt::Write as _;

use crate::value::{format_real, RawValue};

/// One `key = value ! description` line (or several, for lists).
#[derive(Clone, Debug, PartialEq)]
pub struct EntryOut<'a> {
    /// Parameter name.
    pub key: &'a str,
    /// Value to write.
    pub value: RawValue,
    /// Trailing comment.
    pub description: &'a str,
}

/// A `&Name ... /End` block.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOut<'a> {
    /// Section name, written after `&`.
    pub name: &'a str,
    /// Entries in output order.
    pub entries: Vec<EntryOut<'a>>,
}

const RULE: &str = "!===================";

/// Render sections as `.i3d` text.
///
/// Each list is expanded to `key(1)`, `key(2)`, ... entries. An empty list
/// writes nothing.
pub fn write_i3d(sections: &[SectionOut<'_>]) -> String {
    let mut out = String::from("! -*- mode: f90 -*-\n");
    for section in sections {
        let _ = write!(out, "\n{RULE}\n&{}\n{RULE}\n\n", section.name);
        for entry in &section.entries {
            match &entry.value {
                RawValue::List(items) => {
                    for (i, v) in items.iter().enumerate() {
                        let key = format!("{}({})", entry.key, i + 1);
                        push_line(&mut out, &key, &format_real(*v), entry.description);
                    }
                }
                value => push_line(&mut out, entry.key, &value.to_string(), entry.description),
            }
        }
        out.push_str("\n/End\n");
    }
    out
}

fn push_line(out: &mut String, key: &str, value: &str, description: &str) {
    let _ = writeln!(out, "{key:>15} = {value:<15} ! {description}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_i3d;

    fn entry<'a>(key: &'a str, value: RawValue) -> EntryOut<'a> {
        EntryOut {
            key,
            value,
            description: "desc",
        }
    }

    #[test]
    fn layout() {
        let text = write_i3d(&[SectionOut {
            name: "BasicParam",
            entries: vec![entry("nx", RawValue::Int(17))],
        }]);
        assert_eq!(
            text,
            "! -*- mode: f90 -*-\n\
             \n\
             !===================\n\
             &BasicParam\n\
             !===================\n\
             \n             nx = 17              ! desc\n\
             \n\
             /End\n"
        );
    }

    #[test]
    fn lists_expand_and_empty_lists_vanish() {
        let text = write_i3d(&[SectionOut {
            name: "ScalarParam",
            entries: vec![
                entry("sc", RawValue::List(vec![1.0, 0.5])),
                entry("ri", RawValue::List(vec![])),
            ],
        }]);
        assert!(text.contains("sc(1) = 1.0"));
        assert!(text.contains("sc(2) = 0.5"));
        assert!(!text.contains("ri"));
    }

    #[test]
    fn output_reads_back() {
        let sections = [
            SectionOut {
                name: "BasicParam",
                entries: vec![
                    entry("nx", RawValue::Int(181)),
                    entry("xlx", RawValue::Float(18.0)),
                    entry("ilmn", RawValue::Bool(true)),
                ],
            },
            SectionOut {
                name: "InOutParam",
                entries: vec![entry("filename", RawValue::Str("run.i3d".into()))],
            },
        ];
        let doc = parse_i3d(&write_i3d(&sections)).unwrap();
        for section in &sections {
            let read = doc.section(section.name).unwrap();
            for e in &section.entries {
                assert_eq!(read[e.key], e.value);
            }
        }
    }
}
