//! Project root nodes

use super::{ExperimentNode, NodeData, Session};
use crate::namespace::Namespaces;
use crate::vocab;

/// The root node of a decoded experiment record
///
/// Owns its sessions and the namespace binding set used to qualify attribute
/// values during decode. A fresh project carries the core document bindings;
/// the decoder copies the source graph's non-reserved bindings on top.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    data: NodeData,
    namespaces: Namespaces,
    sessions: Vec<Session>,
}

impl Project {
    /// Create a new project with the given identifier and the default
    /// document namespace bindings
    pub fn new(id: impl Into<String>) -> Self {
        let mut namespaces = Namespaces::new();
        namespaces.bind("nidm", vocab::nidm::NAMESPACE);
        namespaces.bind("prov", vocab::prov::NAMESPACE);
        namespaces.bind("xsd", vocab::xsd::NAMESPACE);
        namespaces.bind("dct", vocab::dct::NAMESPACE);
        namespaces.bind("rdf", vocab::rdf::NAMESPACE);

        Project {
            data: NodeData::new(id),
            namespaces,
            sessions: Vec::new(),
        }
    }

    /// Get the project's namespace binding set
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Bind a namespace prefix on the project
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.namespaces.bind(prefix, namespace);
    }

    /// Get the project's sessions
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Attach a session to the project
    pub fn add_session(&mut self, session: Session) {
        self.sessions.push(session);
    }
}

impl ExperimentNode for Project {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut NodeData {
        &mut self.data
    }
}
