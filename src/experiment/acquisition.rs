//! Acquisition activities and their generated objects

use super::{ExperimentNode, NodeData};

/// The decoded subtype of an acquisition activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcquisitionKind {
    /// Acquisition with no more specific subtype (e.g. stimulus file capture)
    Generic,
    /// MRI scan acquisition
    MagneticResonance,
    /// Assessment instrument acquisition
    Assessment,
}

/// The decoded subtype of an acquisition's generated entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcquisitionObjectKind {
    /// Plain generated entity (stimulus/events files decode as this)
    Generic,
    /// MRI scan entity
    MagneticResonance,
    /// Assessment instrument entity
    Assessment,
}

/// A data-collection activity within a session
///
/// Owns the entities it generated. Instantiated at most once per identifier
/// within a session, even when several generated entities point back to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acquisition {
    data: NodeData,
    kind: AcquisitionKind,
    objects: Vec<AcquisitionObject>,
}

impl Acquisition {
    /// Create a new acquisition with the given identifier and subtype
    pub fn new(id: impl Into<String>, kind: AcquisitionKind) -> Self {
        Acquisition {
            data: NodeData::new(id),
            kind,
            objects: Vec::new(),
        }
    }

    /// Get the acquisition subtype
    pub fn kind(&self) -> AcquisitionKind {
        self.kind
    }

    /// Get the entities generated by this acquisition
    pub fn acquisition_objects(&self) -> &[AcquisitionObject] {
        &self.objects
    }

    /// Attach a generated entity
    pub fn add_acquisition_object(&mut self, object: AcquisitionObject) {
        self.objects.push(object);
    }
}

impl ExperimentNode for Acquisition {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut NodeData {
        &mut self.data
    }
}

/// An entity generated by an acquisition activity
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcquisitionObject {
    data: NodeData,
    kind: AcquisitionObjectKind,
    attributed_to: Option<String>,
}

impl AcquisitionObject {
    /// Create a new acquisition object with the given identifier and subtype
    pub fn new(id: impl Into<String>, kind: AcquisitionObjectKind) -> Self {
        AcquisitionObject {
            data: NodeData::new(id),
            kind,
            attributed_to: None,
        }
    }

    /// Get the object subtype
    pub fn kind(&self) -> AcquisitionObjectKind {
        self.kind
    }

    /// Record that this entity was attributed to another acquisition object
    ///
    /// Non-owning link by identifier; used for stimulus files attributed to an
    /// MRI scan entity.
    pub fn set_attributed_to(&mut self, object_id: impl Into<String>) {
        self.attributed_to = Some(object_id.into());
    }

    /// Get the identifier of the object this entity was attributed to, if any
    pub fn attributed_to(&self) -> Option<&str> {
        self.attributed_to.as_deref()
    }
}

impl ExperimentNode for AcquisitionObject {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut NodeData {
        &mut self.data
    }
}
