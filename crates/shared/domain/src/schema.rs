//! Declarative description of the attribute tree a feature area exposes.
//!
//! A declaration only names keys and their shape. Checking values against it is
//! left to the schema subsystem that consumes the declaration.

use crate::areas::AreaSet;
use crate::field::FieldName;

/// Shape of the value stored under a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    StringList,
    /// Nested attribute map.
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: FieldName,
    pub kind: ValueKind,
    pub required: bool,
    pub description: &'static str,
    pub children: Vec<Self>,
}

impl Attribute {
    #[must_use]
    pub const fn new(name: FieldName, kind: ValueKind) -> Self {
        Self { name, kind, required: false, description: "", children: Vec::new() }
    }

    /// A [`ValueKind::Block`] attribute holding `children`.
    #[must_use]
    pub fn block(name: FieldName, children: impl IntoIterator<Item = Self>) -> Self {
        Self { children: children.into_iter().collect(), ..Self::new(name, ValueKind::Block) }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn find(&self, key: &str) -> Option<&Self> {
        if self.name == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    fn collect_keys(&self, keys: &mut Vec<FieldName>) {
        keys.push(self.name);
        for child in &self.children {
            child.collect_keys(keys);
        }
    }
}

/// The attribute tree of one feature area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSchema {
    pub name: &'static str,
    pub area: AreaSet,
    attributes: Vec<Attribute>,
}

impl ResourceSchema {
    #[must_use]
    pub const fn new(name: &'static str, area: AreaSet) -> Self {
        Self { name, area, attributes: Vec::new() }
    }

    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Top-level attributes in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Depth-first search for `key` at any nesting level.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Attribute> {
        self.attributes.iter().find_map(|attribute| attribute.find(key))
    }

    #[must_use]
    pub fn recognizes(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Every declared key, parents before their children.
    #[must_use]
    pub fn keys(&self) -> Vec<FieldName> {
        let mut keys = Vec::new();
        for attribute in &self.attributes {
            attribute.collect_keys(&mut keys);
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: FieldName = FieldName::new("root");
    const LEAF: FieldName = FieldName::new("leaf");
    const FLAT: FieldName = FieldName::new("flat");

    fn sample() -> ResourceSchema {
        ResourceSchema::new("sample", AreaSet::SCHEDULING)
            .attribute(Attribute::block(ROOT, [Attribute::new(LEAF, ValueKind::Boolean).required()]))
            .attribute(Attribute::new(FLAT, ValueKind::Integer))
    }

    #[test]
    fn finds_nested_keys() {
        let schema = sample();
        let leaf = schema.find("leaf").expect("nested key is declared");
        assert_eq!(leaf.kind, ValueKind::Boolean);
        assert!(leaf.required);
        assert!(schema.recognizes("flat"));
        assert!(!schema.recognizes("missing"));
    }

    #[test]
    fn keys_are_listed_parent_first() {
        assert_eq!(sample().keys(), vec![ROOT, LEAF, FLAT]);
    }

    #[test]
    fn block_builder_sets_kind() {
        let block = Attribute::block(ROOT, Vec::new());
        assert_eq!(block.kind, ValueKind::Block);
        assert!(block.children.is_empty());
        assert!(!block.required);
    }
}
