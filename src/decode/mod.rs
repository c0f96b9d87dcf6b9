//! Hierarchy decoding of NIDM-Experiment documents
//!
//! The document serializes no explicit hierarchy pointers; Project, Session,
//! Acquisition and AcquisitionObject nodes are inferred from the constellation
//! of triples around each subject: `rdf:type` markers, `dct:isPartOf` hops,
//! `prov:wasGeneratedBy` back-references and the acquisition-modality pattern
//! on generated entities.

mod import;
mod literal;

use crate::experiment::{
    AcquisitionKind, AcquisitionObject, AcquisitionObjectKind, ExperimentNode, Project, Session,
};
use crate::graph::Graph;
use crate::model::{Object, Predicate, Subject};
use crate::namespace::{split_iri, RESERVED_PREFIXES};
use crate::vocab::{dct, nidm, prov, rdf};
use crate::{NidmError, Result};
use std::collections::BTreeSet;

/// What kind of value failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnresolvedKind {
    /// An IRI-valued attribute whose namespace has no binding
    Attribute,
    /// A `prov:hadRole` object whose namespace has no binding
    Role,
}

/// A diagnostic for an attribute dropped during decode
///
/// The reference behavior silently lost these; collecting them lets callers
/// detect data loss instead of discovering it via a missing field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unresolved {
    /// The subject whose attribute was dropped (IRI or blank-node id)
    pub subject: String,
    /// The predicate of the dropped attribute
    pub predicate: Predicate,
    /// The IRI value that could not be qualified
    pub value: String,
    /// Which resolution path failed
    pub kind: UnresolvedKind,
}

/// The result of a decode: the project plus drop diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    /// The fully populated experiment record
    pub project: Project,
    /// Every attribute or role dropped for lack of a namespace binding
    pub unresolved: Vec<Unresolved>,
}

/// Classification of an acquisition's generated entity
///
/// Checked in this fixed priority order; the first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityClass {
    MagneticResonance,
    Assessment,
    StimulusResponse,
}

impl EntityClass {
    /// The activity/entity node kinds this classification instantiates
    fn kinds(self) -> (AcquisitionKind, AcquisitionObjectKind) {
        match self {
            EntityClass::MagneticResonance => (
                AcquisitionKind::MagneticResonance,
                AcquisitionObjectKind::MagneticResonance,
            ),
            EntityClass::Assessment => {
                (AcquisitionKind::Assessment, AcquisitionObjectKind::Assessment)
            }
            EntityClass::StimulusResponse => {
                (AcquisitionKind::Generic, AcquisitionObjectKind::Generic)
            }
        }
    }
}

/// Classify a generated entity by its outgoing type triples
///
/// MRI is checked first, then assessment, then stimulus; an entity matching
/// several patterns takes only the first branch. Entities matching none are
/// not decoded.
pub(crate) fn classify_entity(graph: &Graph, entity: &Subject) -> Option<EntityClass> {
    let mri: Object = nidm::MAGNETIC_RESONANCE_IMAGING.clone().into();
    if graph.contains(entity, &nidm::HAD_ACQUISITION_MODALITY, &mri) {
        return Some(EntityClass::MagneticResonance);
    }
    if graph.contains(entity, &rdf::TYPE, &nidm::ASSESSMENT.clone().into()) {
        return Some(EntityClass::Assessment);
    }
    if graph.contains(entity, &rdf::TYPE, &nidm::STIMULUS_RESPONSE_FILE.clone().into()) {
        return Some(EntityClass::StimulusResponse);
    }
    None
}

/// Derive a node identifier from a subject: the IRI's local name, or the
/// blank-node id
pub(crate) fn local_name(subject: &Subject) -> String {
    match subject {
        Subject::NamedNode(node) => {
            let (_, local) = split_iri(node.as_str());
            if local.is_empty() {
                node.as_str().to_string()
            } else {
                local.to_string()
            }
        }
        Subject::BlankNode(node) => node.as_str().to_string(),
    }
}

/// Plain string form of a subject for diagnostics
pub(crate) fn subject_repr(subject: &Subject) -> String {
    match subject {
        Subject::NamedNode(node) => node.as_str().to_string(),
        Subject::BlankNode(node) => format!("_:{}", node.as_str()),
    }
}

/// Decode a parsed NIDM-Experiment graph into a typed experiment record
///
/// Fails with [`NidmError::MissingProject`] when the graph holds no
/// Project-typed subject; when several exist, the smallest subject IRI wins.
/// Unresolvable attributes never abort the decode; they are collected in
/// [`DecodeOutcome::unresolved`].
pub fn decode(graph: &Graph) -> Result<DecodeOutcome> {
    let mut unresolved = Vec::new();

    // Locate the unique Project subject. Graph iteration is sorted, so the
    // first candidate is the smallest IRI.
    let candidates = graph.subjects_for(&rdf::TYPE, &nidm::PROJECT.clone().into());
    let Some(project_subject) = candidates.first().cloned() else {
        return Err(NidmError::MissingProject);
    };
    if candidates.len() > 1 {
        tracing::warn!(
            count = candidates.len(),
            kept = %project_subject,
            "multiple Project-typed subjects; keeping the smallest IRI"
        );
    }

    let mut project = Project::new(local_name(&project_subject));
    for (prefix, namespace) in graph.namespaces().iter() {
        if !RESERVED_PREFIXES.contains(&prefix) {
            project.bind(prefix, namespace);
        }
    }
    // Snapshot of the binding set threaded through every resolver call
    let namespaces = project.namespaces().clone();
    import::import_attributes(
        graph,
        &project_subject,
        &namespaces,
        project.data_mut(),
        &mut unresolved,
    );

    // Stimulus entities attached to an MRI entity are captured through the
    // attribution path below; the generic branch must not capture them again.
    let mri_attached = mri_attached_stimuli(graph);

    for session_subject in graph.subjects_for(&rdf::TYPE, &nidm::SESSION.clone().into()) {
        let mut session = Session::new(local_name(&session_subject));
        import::import_attributes(
            graph,
            &session_subject,
            &namespaces,
            session.data_mut(),
            &mut unresolved,
        );

        for activity in graph.subjects_for(&dct::IS_PART_OF, &session_subject.clone().into()) {
            // Only acquisition activities are decoded; subjects typed merely
            // prov:Activity are skipped.
            if !graph.contains(&activity, &rdf::TYPE, &nidm::ACQUISITION.clone().into()) {
                tracing::debug!(subject = %activity, "skipping non-acquisition session member");
                continue;
            }
            let activity_id = local_name(&activity);

            for entity in graph.subjects_for(&prov::WAS_GENERATED_BY, &activity.clone().into()) {
                let Some(class) = classify_entity(graph, &entity) else {
                    continue;
                };
                if class == EntityClass::StimulusResponse && mri_attached.contains(&entity) {
                    continue;
                }

                let (acquisition_kind, object_kind) = class.kinds();
                let (acquisition, created) =
                    session.get_or_create_acquisition(&activity_id, acquisition_kind);
                if created {
                    import::import_attributes(
                        graph,
                        &activity,
                        &namespaces,
                        acquisition.data_mut(),
                        &mut unresolved,
                    );
                }

                let mut object = AcquisitionObject::new(local_name(&entity), object_kind);
                import::import_attributes(
                    graph,
                    &entity,
                    &namespaces,
                    object.data_mut(),
                    &mut unresolved,
                );
                let object_id = object.id().to_string();
                acquisition.add_acquisition_object(object);

                if class == EntityClass::MagneticResonance {
                    for stimulus in
                        graph.subjects_for(&prov::WAS_ATTRIBUTED_TO, &entity.clone().into())
                    {
                        let stimulus_type: Object = nidm::STIMULUS_RESPONSE_FILE.clone().into();
                        if !graph.contains(&stimulus, &rdf::TYPE, &stimulus_type) {
                            continue;
                        }
                        let mut events = AcquisitionObject::new(
                            local_name(&stimulus),
                            AcquisitionObjectKind::Generic,
                        );
                        events.set_attributed_to(&object_id);
                        import::import_attributes(
                            graph,
                            &stimulus,
                            &namespaces,
                            events.data_mut(),
                            &mut unresolved,
                        );
                        acquisition.add_acquisition_object(events);
                    }
                }
            }
        }

        project.add_session(session);
    }

    Ok(DecodeOutcome { project, unresolved })
}

/// Collect stimulus-typed subjects attributed to a decoded MRI entity
///
/// Only attributions to MRI entities reachable through a decoded acquisition
/// count: a stimulus attributed to an MRI entity that is never decoded cannot
/// be captured through the attribution path, so the generic branch must still
/// pick it up.
fn mri_attached_stimuli(graph: &Graph) -> BTreeSet<Subject> {
    let stimulus_type: Object = nidm::STIMULUS_RESPONSE_FILE.clone().into();
    let mut attached = BTreeSet::new();
    for triple in graph.iter_triples() {
        if triple.predicate() != &*prov::WAS_ATTRIBUTED_TO {
            continue;
        }
        let Some(target) = triple.object().as_subject() else {
            continue;
        };
        if classify_entity(graph, &target) == Some(EntityClass::MagneticResonance)
            && entity_is_decoded(graph, &target)
            && graph.contains(triple.subject(), &rdf::TYPE, &stimulus_type)
        {
            attached.insert(triple.subject().clone());
        }
    }
    attached
}

/// Check whether an entity is reachable by the hierarchy walk: generated by
/// an acquisition activity that is part of a session
fn entity_is_decoded(graph: &Graph, entity: &Subject) -> bool {
    for activity in graph.objects_for(entity, &prov::WAS_GENERATED_BY) {
        let Some(activity_subject) = activity.as_subject() else {
            continue;
        };
        if !graph.contains(&activity_subject, &rdf::TYPE, &nidm::ACQUISITION.clone().into()) {
            continue;
        }
        for session in graph.objects_for(&activity_subject, &dct::IS_PART_OF) {
            let Some(session_subject) = session.as_subject() else {
                continue;
            };
            if graph.contains(&session_subject, &rdf::TYPE, &nidm::SESSION.clone().into()) {
                return true;
            }
        }
    }
    false
}
