//! RDF graph abstraction and operations

use crate::model::*;
use crate::namespace::Namespaces;
use std::collections::BTreeSet;

/// RDF graph representation
///
/// A graph is a collection of RDF triples plus the namespace prefix bindings
/// declared on the source document. This implementation uses a BTreeSet for
/// storage, so iteration order is the terms' lexical order and every walk over
/// the graph is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    namespaces: Namespaces,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            triples: BTreeSet::new(),
            namespaces: Namespaces::new(),
        }
    }

    /// Create a graph from an iterator of triples
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        Graph {
            triples: triples.into_iter().collect(),
            namespaces: Namespaces::new(),
        }
    }

    /// Add a triple to the graph
    pub fn add_triple(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Bind a namespace prefix on the graph
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.namespaces.bind(prefix, namespace);
    }

    /// Get the namespace prefix bindings declared on the graph
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Check if a triple exists in the graph
    pub fn contains_triple(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Check if a (subject, predicate, object) statement exists in the graph
    pub fn contains(&self, subject: &Subject, predicate: &Predicate, object: &Object) -> bool {
        self.triples
            .contains(&Triple::new(subject.clone(), predicate.clone(), object.clone()))
    }

    /// Query triples matching the given pattern
    ///
    /// None values act as wildcards matching any term.
    pub fn query_triples(
        &self,
        subject: Option<&Subject>,
        predicate: Option<&Predicate>,
        object: Option<&Object>,
    ) -> Vec<Triple> {
        self.triples
            .iter()
            .filter(|triple| triple.matches_pattern(subject, predicate, object))
            .cloned()
            .collect()
    }

    /// Get all subjects of triples with the given predicate and object
    pub fn subjects_for(&self, predicate: &Predicate, object: &Object) -> Vec<Subject> {
        let mut subjects: Vec<Subject> = self
            .triples
            .iter()
            .filter(|t| t.predicate() == predicate && t.object() == object)
            .map(|t| t.subject().clone())
            .collect();
        subjects.dedup();
        subjects
    }

    /// Get all objects of triples with the given subject and predicate
    pub fn objects_for(&self, subject: &Subject, predicate: &Predicate) -> Vec<Object> {
        self.triples
            .iter()
            .filter(|t| t.subject() == subject && t.predicate() == predicate)
            .map(|t| t.object().clone())
            .collect()
    }

    /// Get all (predicate, object) pairs for the given subject
    pub fn predicate_objects(&self, subject: &Subject) -> Vec<(Predicate, Object)> {
        self.triples
            .iter()
            .filter(|t| t.subject() == subject)
            .map(|t| (t.predicate().clone(), t.object().clone()))
            .collect()
    }

    /// Get all distinct subjects in the graph
    pub fn subjects(&self) -> BTreeSet<Subject> {
        self.triples.iter().map(|t| t.subject().clone()).collect()
    }

    /// Iterate over all triples
    pub fn iter_triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get the number of triples in the graph
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Graph::from_triples(iter)
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}
