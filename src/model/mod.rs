//! RDF data model: terms and triples

pub mod term;

pub use term::{BlankNode, Literal, NamedNode, Object, Predicate, Subject, Triple};
