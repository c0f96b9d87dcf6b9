//! Session nodes and their acquisition arena

use super::{Acquisition, AcquisitionKind, ExperimentNode, NodeData};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// A session within a project
///
/// Owns its acquisitions in an arena keyed by identifier, so the decoder can
/// ask "does an acquisition with this id already exist" instead of scattering
/// duplicate checks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    data: NodeData,
    acquisitions: IndexMap<String, Acquisition>,
}

impl Session {
    /// Create a new session with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Session {
            data: NodeData::new(id),
            acquisitions: IndexMap::new(),
        }
    }

    /// Iterate over the session's acquisitions in creation order
    pub fn acquisitions(&self) -> impl Iterator<Item = &Acquisition> {
        self.acquisitions.values()
    }

    /// Get an acquisition by identifier
    pub fn acquisition(&self, id: &str) -> Option<&Acquisition> {
        self.acquisitions.get(id)
    }

    /// Check whether an acquisition with this identifier exists
    pub fn acquisition_exists(&self, id: &str) -> bool {
        self.acquisitions.contains_key(id)
    }

    /// Get the acquisition with this identifier, creating it if absent
    ///
    /// Returns the acquisition and whether it was just created, so the caller
    /// can import the activity's attributes exactly once. An existing
    /// acquisition keeps its original kind.
    pub fn get_or_create_acquisition(
        &mut self,
        id: &str,
        kind: AcquisitionKind,
    ) -> (&mut Acquisition, bool) {
        match self.acquisitions.entry(id.to_string()) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(Acquisition::new(id, kind)), true),
        }
    }

    /// Get the number of acquisitions in the session
    pub fn acquisition_count(&self) -> usize {
        self.acquisitions.len()
    }
}

impl ExperimentNode for Session {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut NodeData {
        &mut self.data
    }
}
