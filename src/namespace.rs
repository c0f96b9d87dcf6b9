//! Namespace prefix bindings and qualified names
//!
//! A decoded attribute value is never a raw IRI string: IRI-valued objects are
//! shortened to a [`QualifiedName`] against the document's binding set, or
//! reported as unresolved when no binding covers their namespace.

use indexmap::IndexMap;
use std::fmt;

/// Prefixes that are pre-declared on every destination document and are
/// never copied from a source graph.
pub const RESERVED_PREFIXES: &[&str] = &["prov", "xsd", "nidm"];

/// A (prefix, namespace, local-name) vocabulary term
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    prefix: String,
    namespace: String,
    local: String,
}

impl QualifiedName {
    /// Create a new qualified name
    pub fn new(
        prefix: impl Into<String>,
        namespace: impl Into<String>,
        local: impl Into<String>,
    ) -> Self {
        QualifiedName {
            prefix: prefix.into(),
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Get the bound prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the namespace IRI
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the local name
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Expand back to the full IRI
    pub fn iri(&self) -> String {
        format!("{}{}", self.namespace, self.local)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local)
    }
}

/// Split an IRI into its namespace and local-name portions
///
/// Uses the maximal-prefix convention: the namespace ends at the last `#`,
/// otherwise the last `/`, otherwise the last `:`.
pub fn split_iri(iri: &str) -> (&str, &str) {
    for separator in ['#', '/', ':'] {
        if let Some(position) = iri.rfind(separator) {
            return iri.split_at(position + 1);
        }
    }
    (iri, "")
}

/// An ordered set of (prefix, namespace IRI) bindings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespaces {
    bindings: IndexMap<String, String>,
}

impl Namespaces {
    /// Create an empty binding set
    pub fn new() -> Self {
        Namespaces {
            bindings: IndexMap::new(),
        }
    }

    /// Bind a prefix to a namespace IRI
    ///
    /// Rebinding an existing prefix replaces its namespace.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.bindings.insert(prefix.into(), namespace.into());
    }

    /// Get the namespace bound to a prefix
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// Check whether a prefix is bound
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.bindings.contains_key(prefix)
    }

    /// Find the prefix bound to a namespace IRI, if any
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, iri)| iri.as_str() == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Resolve an IRI into a qualified name against this binding set
    ///
    /// The IRI is split with [`split_iri`] and its namespace portion matched
    /// exactly against the bound namespaces. Returns `None` when no binding
    /// matches or the IRI has no local name; the caller decides whether that
    /// is a diagnostic.
    pub fn resolve(&self, iri: &str) -> Option<QualifiedName> {
        let (namespace, local) = split_iri(iri);
        if local.is_empty() {
            return None;
        }
        self.prefix_for(namespace)
            .map(|prefix| QualifiedName::new(prefix, namespace, local))
    }

    /// Iterate over the (prefix, namespace) bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(prefix, iri)| (prefix.as_str(), iri.as_str()))
    }

    /// Get the number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the binding set is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
