//! Person nodes referenced by qualified associations

use super::{ExperimentNode, NodeData};

/// A person (PROV agent) referenced from an activity node
///
/// A person is not owned by any one activity; the same agent may appear in
/// association records on several nodes. Identity is the agent IRI's local
/// name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    data: NodeData,
}

impl Person {
    /// Create a new person with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Person {
            data: NodeData::new(id),
        }
    }
}

impl ExperimentNode for Person {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut NodeData {
        &mut self.data
    }
}
