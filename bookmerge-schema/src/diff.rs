use crate::value::AttrValue;
use std::fmt;

/// What happened to one attribute between two versions of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    Add,
    Change,
    Delete,
    Keep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDiff {
    pub name: &'static str,
    pub op: DiffOp,
    pub before: Option<AttrValue>,
    pub after: Option<AttrValue>,
}

impl AttributeDiff {
    pub fn new(name: &'static str, before: Option<AttrValue>, after: Option<AttrValue>) -> Self {
        let op = match (&before, &after) {
            (None, None) => DiffOp::Keep,
            (None, Some(_)) => DiffOp::Add,
            (Some(_), None) => DiffOp::Delete,
            (Some(b), Some(a)) if b == a => DiffOp::Keep,
            _ => DiffOp::Change,
        };
        Self {
            name,
            op,
            before,
            after,
        }
    }
}

/// Per-attribute comparison of two versions of a model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diff {
    pub attributes: Vec<AttributeDiff>,
}

impl Diff {
    pub fn new(attributes: Vec<AttributeDiff>) -> Self {
        Self { attributes }
    }

    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.attributes.iter().any(|a| a.op != DiffOp::Keep)
    }

    /// Attributes that are not [`DiffOp::Keep`].
    pub fn changes(&self) -> impl Iterator<Item = &AttributeDiff> {
        self.attributes.iter().filter(|a| a.op != DiffOp::Keep)
    }

    /// Unified-diff style lines: `- name: old` then `+ name: new`.
    pub fn as_diff_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for change in self.changes() {
            if let Some(before) = &change.before {
                lines.push(format!("- {}: {}", change.name, before));
            }
            if let Some(after) = &change.after {
                lines.push(format!("+ {}: {}", change.name, after));
            }
        }
        lines
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_diff_lines().join("\n"))
    }
}
