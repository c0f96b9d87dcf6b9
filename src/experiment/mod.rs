//! Decoded experiment record types
//!
//! The hierarchy is Project → Session → Acquisition → AcquisitionObject, with
//! Person/Role associations attachable to any node. All nodes are built during
//! one decode pass and are not mutated afterwards.

mod acquisition;
mod person;
mod project;
mod session;

pub use acquisition::{Acquisition, AcquisitionKind, AcquisitionObject, AcquisitionObjectKind};
pub use person::Person;
pub use project::Project;
pub use session::Session;

use crate::model::Predicate;
use crate::namespace::QualifiedName;
use indexmap::IndexMap;
use std::fmt;

/// A decoded attribute value: a native scalar or a namespace-qualified term
///
/// Raw, un-prefixed IRI strings never appear here; IRI-valued objects that
/// cannot be qualified are dropped with a diagnostic instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    String(String),
    QualifiedName(QualifiedName),
}

impl AttributeValue {
    /// Get the integer value, if this is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the float value, if this is one
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the string value, if this is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Get the qualified name, if this is one
    pub fn as_qualified_name(&self) -> Option<&QualifiedName> {
        match self {
            AttributeValue::QualifiedName(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(v) => v.fmt(f),
            AttributeValue::Float(v) => v.fmt(f),
            AttributeValue::String(v) => v.fmt(f),
            AttributeValue::QualifiedName(v) => v.fmt(f),
        }
    }
}

/// A (Person, Role) relation record attached to a node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Association {
    person: Person,
    role: QualifiedName,
}

impl Association {
    /// Create a new association record
    pub fn new(person: Person, role: QualifiedName) -> Self {
        Association { person, role }
    }

    /// Get the associated person
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Get the role qualified name
    pub fn role(&self) -> &QualifiedName {
        &self.role
    }
}

/// State shared by every decoded node: identifier, attribute map, associations
///
/// The attribute map is keyed by predicate IRI and keeps insertion order; a
/// second write to the same predicate replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeData {
    id: String,
    attributes: IndexMap<Predicate, AttributeValue>,
    associations: Vec<Association>,
}

impl NodeData {
    /// Create node state with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        NodeData {
            id: id.into(),
            attributes: IndexMap::new(),
            associations: Vec::new(),
        }
    }

    /// Get the node identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the attribute map
    pub fn attributes(&self) -> &IndexMap<Predicate, AttributeValue> {
        &self.attributes
    }

    /// Set an attribute, replacing any earlier value for the predicate
    pub fn set_attribute(&mut self, predicate: Predicate, value: AttributeValue) {
        self.attributes.insert(predicate, value);
    }

    /// Get the association records
    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    /// Attach an association record
    pub fn add_association(&mut self, association: Association) {
        self.associations.push(association);
    }
}

/// Common accessors shared by every decoded node type
pub trait ExperimentNode {
    /// Get the node's shared state
    fn data(&self) -> &NodeData;

    /// Get the node's shared state mutably
    fn data_mut(&mut self) -> &mut NodeData;

    /// Get the node identifier (the local name of its source IRI)
    fn id(&self) -> &str {
        self.data().id()
    }

    /// Get the node's attribute map in insertion order
    fn attributes(&self) -> &IndexMap<Predicate, AttributeValue> {
        self.data().attributes()
    }

    /// Get the node's (Person, Role) association records
    fn associations(&self) -> &[Association] {
        self.data().associations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamedNode;

    #[test]
    fn test_attribute_overwrite_keeps_last() {
        let mut data = NodeData::new("n1");
        let p = NamedNode::new_unchecked("urn:test:p");
        data.set_attribute(p.clone(), AttributeValue::Integer(1));
        data.set_attribute(p.clone(), AttributeValue::Integer(2));

        assert_eq!(data.attributes().len(), 1);
        assert_eq!(data.attributes()[&p], AttributeValue::Integer(2));
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let mut data = NodeData::new("n1");
        let b = NamedNode::new_unchecked("urn:test:b");
        let a = NamedNode::new_unchecked("urn:test:a");
        data.set_attribute(b.clone(), AttributeValue::String("first".into()));
        data.set_attribute(a.clone(), AttributeValue::String("second".into()));

        let keys: Vec<_> = data.attributes().keys().cloned().collect();
        assert_eq!(keys, vec![b, a]);
    }

    #[test]
    fn test_attribute_value_accessors() {
        assert_eq!(AttributeValue::Integer(7).as_integer(), Some(7));
        assert_eq!(AttributeValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(AttributeValue::String("x".into()).as_str(), Some("x"));
        assert!(AttributeValue::Integer(7).as_str().is_none());
    }
}
