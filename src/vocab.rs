//! Common RDF vocabularies and namespaces
//!
//! The NIDM-Experiment document vocabulary: core RDF/XSD terms plus the PROV
//! and NIDM terms the hierarchy decoder pattern-matches on.

use crate::model::NamedNode;
use std::sync::LazyLock;

/// RDF vocabulary namespace
pub mod rdf {
    use super::*;

    /// The RDF namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type predicate
    pub static TYPE: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}type", NAMESPACE)));
}

/// XML Schema datatypes vocabulary namespace
pub mod xsd {
    use super::*;

    /// The XSD namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string datatype
    pub static STRING: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}string", NAMESPACE)));

    /// xsd:boolean datatype
    pub static BOOLEAN: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}boolean", NAMESPACE)));

    /// xsd:integer datatype
    pub static INTEGER: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}integer", NAMESPACE)));

    /// xsd:int datatype
    pub static INT: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}int", NAMESPACE)));

    /// xsd:long datatype
    pub static LONG: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}long", NAMESPACE)));

    /// xsd:float datatype
    pub static FLOAT: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}float", NAMESPACE)));

    /// xsd:double datatype
    pub static DOUBLE: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}double", NAMESPACE)));

    /// xsd:dateTime datatype
    pub static DATE_TIME: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}dateTime", NAMESPACE)));
}

/// W3C PROV-O vocabulary namespace
pub mod prov {
    use super::*;

    /// The PROV namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/ns/prov#";

    /// prov:Activity class
    pub static ACTIVITY: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}Activity", NAMESPACE)));

    /// prov:Entity class
    pub static ENTITY: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}Entity", NAMESPACE)));

    /// prov:Agent class
    pub static AGENT: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}Agent", NAMESPACE)));

    /// prov:wasGeneratedBy predicate
    pub static WAS_GENERATED_BY: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}wasGeneratedBy", NAMESPACE)));

    /// prov:wasAttributedTo predicate
    pub static WAS_ATTRIBUTED_TO: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}wasAttributedTo", NAMESPACE)));

    /// prov:wasAssociatedWith predicate
    pub static WAS_ASSOCIATED_WITH: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}wasAssociatedWith", NAMESPACE)));

    /// prov:qualifiedAssociation predicate
    pub static QUALIFIED_ASSOCIATION: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}qualifiedAssociation", NAMESPACE)));

    /// prov:hadRole predicate
    pub static HAD_ROLE: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}hadRole", NAMESPACE)));
}

/// Dublin Core terms vocabulary namespace
pub mod dct {
    use super::*;

    /// The DC terms namespace IRI
    pub const NAMESPACE: &str = "http://purl.org/dc/terms/";

    /// dct:isPartOf predicate
    pub static IS_PART_OF: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}isPartOf", NAMESPACE)));
}

/// NIDM-Experiment vocabulary namespace
pub mod nidm {
    use super::*;

    /// The NIDM namespace IRI
    pub const NAMESPACE: &str = "http://purl.org/nidash/nidm#";

    /// nidm:Project class
    pub static PROJECT: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}Project", NAMESPACE)));

    /// nidm:Session class
    pub static SESSION: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}Session", NAMESPACE)));

    /// nidm:Acquisition activity class
    pub static ACQUISITION: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}Acquisition", NAMESPACE)));

    /// nidm:hadAcquisitionModality predicate
    pub static HAD_ACQUISITION_MODALITY: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}hadAcquisitionModality", NAMESPACE)));

    /// nidm:MagneticResonanceImaging modality
    pub static MAGNETIC_RESONANCE_IMAGING: LazyLock<NamedNode> = LazyLock::new(|| {
        NamedNode::new_unchecked(format!("{}MagneticResonanceImaging", NAMESPACE))
    });

    /// nidm:Assessment entity class
    pub static ASSESSMENT: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}Assessment", NAMESPACE)));

    /// nidm:StimulusResponseFile entity class
    pub static STIMULUS_RESPONSE_FILE: LazyLock<NamedNode> =
        LazyLock::new(|| NamedNode::new_unchecked(format!("{}StimulusResponseFile", NAMESPACE)));
}
