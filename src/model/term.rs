//! Owned RDF term types
//!
//! The decoder operates over a fixed, in-memory triple set; terms are plain
//! owned values, ordered and hashable so a graph can live in a `BTreeSet`.

use crate::{NidmError, Result};
use std::fmt;

/// An IRI-identified RDF node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Create a new named node, validating the IRI
    pub fn new(iri: impl Into<String>) -> Result<Self> {
        let iri = iri.into();
        if iri.is_empty()
            || !iri.contains(':')
            || iri.chars().any(|c| c.is_whitespace() || "<>\"{}|^`".contains(c))
        {
            return Err(NidmError::Iri(iri));
        }
        Ok(NamedNode { iri })
    }

    /// Create a named node without validation
    ///
    /// The caller must guarantee the IRI is well formed.
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        NamedNode { iri: iri.into() }
    }

    /// Get the IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    /// Consume the node and return the IRI
    pub fn into_string(self) -> String {
        self.iri
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

/// An anonymous, locally-scoped RDF node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlankNode {
    id: String,
}

impl BlankNode {
    /// Create a new blank node with the given local identifier
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() || id.chars().any(|c| c.is_whitespace()) {
            return Err(NidmError::Iri(format!("_:{id}")));
        }
        Ok(BlankNode { id })
    }

    /// Create a blank node without validation
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        BlankNode { id: id.into() }
    }

    /// Get the local identifier
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id)
    }
}

/// An RDF literal: a lexical value with an optional datatype or language tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    value: String,
    datatype: Option<NamedNode>,
    language: Option<String>,
}

impl Literal {
    /// Create a plain (untyped) literal
    pub fn new(value: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a literal with a datatype annotation
    pub fn new_typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Create a language-tagged literal
    pub fn new_lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the datatype annotation, if any
    pub fn datatype(&self) -> Option<&NamedNode> {
        self.datatype.as_ref()
    }

    /// Get the language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")?;
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^{datatype}")?;
        }
        Ok(())
    }
}

/// The subject position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subject {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
}

impl Subject {
    /// Get the named node, if this subject is one
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Subject::NamedNode(n) => Some(n),
            Subject::BlankNode(_) => None,
        }
    }

    /// Get the blank node, if this subject is one
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Subject::NamedNode(_) => None,
            Subject::BlankNode(n) => Some(n),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::NamedNode(n) => n.fmt(f),
            Subject::BlankNode(n) => n.fmt(f),
        }
    }
}

impl From<NamedNode> for Subject {
    fn from(node: NamedNode) -> Self {
        Subject::NamedNode(node)
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Subject::BlankNode(node)
    }
}

/// The predicate position of a triple is always an IRI
pub type Predicate = NamedNode;

/// The object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Object {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Object {
    /// Get the named node, if this object is one
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Object::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// Get the blank node, if this object is one
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Object::BlankNode(n) => Some(n),
            _ => None,
        }
    }

    /// Get the literal, if this object is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Reinterpret this object as a subject, if it is not a literal
    pub fn as_subject(&self) -> Option<Subject> {
        match self {
            Object::NamedNode(n) => Some(Subject::NamedNode(n.clone())),
            Object::BlankNode(n) => Some(Subject::BlankNode(n.clone())),
            Object::Literal(_) => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::NamedNode(n) => n.fmt(f),
            Object::BlankNode(n) => n.fmt(f),
            Object::Literal(l) => l.fmt(f),
        }
    }
}

impl From<NamedNode> for Object {
    fn from(node: NamedNode) -> Self {
        Object::NamedNode(node)
    }
}

impl From<BlankNode> for Object {
    fn from(node: BlankNode) -> Self {
        Object::BlankNode(node)
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

impl From<Subject> for Object {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::NamedNode(n) => Object::NamedNode(n),
            Subject::BlankNode(n) => Object::BlankNode(n),
        }
    }
}

/// A (subject, predicate, object) statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple {
    subject: Subject,
    predicate: Predicate,
    object: Object,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<Subject>,
        predicate: impl Into<Predicate>,
        object: impl Into<Object>,
    ) -> Self {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Get the subject of the triple
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Get the predicate of the triple
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Get the object of the triple
    pub fn object(&self) -> &Object {
        &self.object
    }

    /// Check the triple against a pattern
    ///
    /// None values act as wildcards matching any term.
    pub fn matches_pattern(
        &self,
        subject: Option<&Subject>,
        predicate: Option<&Predicate>,
        object: Option<&Object>,
    ) -> bool {
        subject.is_none_or(|s| s == &self.subject)
            && predicate.is_none_or(|p| p == &self.predicate)
            && object.is_none_or(|o| o == &self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_node_validation() {
        assert!(NamedNode::new("http://example.org/s").is_ok());
        assert!(NamedNode::new("").is_err());
        assert!(NamedNode::new("no-colon").is_err());
        assert!(NamedNode::new("http://example.org/a b").is_err());
    }

    #[test]
    fn test_literal_display() {
        let plain = Literal::new("hello");
        assert_eq!(format!("{plain}"), "\"hello\"");

        let typed = Literal::new_typed(
            "42",
            NamedNode::new_unchecked("http://www.w3.org/2001/XMLSchema#integer"),
        );
        assert_eq!(
            format!("{typed}"),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );

        let tagged = Literal::new_lang("bonjour", "fr");
        assert_eq!(format!("{tagged}"), "\"bonjour\"@fr");
    }

    #[test]
    fn test_triple_pattern_matching() {
        let s = NamedNode::new_unchecked("http://example.org/s");
        let p = NamedNode::new_unchecked("http://example.org/p");
        let triple = Triple::new(s.clone(), p.clone(), Literal::new("v"));

        let subject = Subject::NamedNode(s);
        assert!(triple.matches_pattern(Some(&subject), None, None));
        assert!(triple.matches_pattern(None, Some(&p), None));
        assert!(triple.matches_pattern(None, None, None));

        let other = Subject::NamedNode(NamedNode::new_unchecked("http://example.org/t"));
        assert!(!triple.matches_pattern(Some(&other), None, None));
    }

    #[test]
    fn test_triple_display() {
        let triple = Triple::new(
            NamedNode::new_unchecked("http://example.org/alice"),
            NamedNode::new_unchecked("http://example.org/says"),
            Literal::new("Hello"),
        );
        assert_eq!(
            format!("{triple}"),
            "<http://example.org/alice> <http://example.org/says> \"Hello\" ."
        );
    }
}
