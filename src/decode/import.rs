//! Attribute import for a single subject
//!
//! Walks every (predicate, object) pair of one subject and attaches it to the
//! target node: IRI objects become qualified names, literals become typed
//! scalars, and `prov:qualifiedAssociation` triples become (Person, Role)
//! association records with the person's own attributes imported recursively.

use super::literal::typed_value;
use super::{local_name, subject_repr, Unresolved, UnresolvedKind};
use crate::experiment::{Association, AttributeValue, ExperimentNode, NodeData, Person};
use crate::graph::Graph;
use crate::model::{Object, Subject};
use crate::namespace::Namespaces;
use crate::vocab::prov;

/// Import all attributes of `subject` onto `node`
///
/// Re-entrant: invoked for every subject the hierarchy decoder discovers,
/// including agents linked through qualified associations. Attributes whose
/// namespace cannot be resolved are recorded in `unresolved` and dropped.
pub fn import_attributes(
    graph: &Graph,
    subject: &Subject,
    namespaces: &Namespaces,
    node: &mut NodeData,
    unresolved: &mut Vec<Unresolved>,
) {
    for (predicate, object) in graph.predicate_objects(subject) {
        if predicate == *prov::QUALIFIED_ASSOCIATION {
            import_association(graph, subject, &object, namespaces, node, unresolved);
            continue;
        }
        match object {
            Object::NamedNode(iri) => match namespaces.resolve(iri.as_str()) {
                Some(qname) => {
                    node.set_attribute(predicate, AttributeValue::QualifiedName(qname));
                }
                None => {
                    tracing::debug!(
                        subject = %subject,
                        predicate = %predicate,
                        value = %iri,
                        "dropping attribute: no namespace binding matches"
                    );
                    unresolved.push(Unresolved {
                        subject: subject_repr(subject),
                        predicate,
                        value: iri.into_string(),
                        kind: UnresolvedKind::Attribute,
                    });
                }
            },
            Object::Literal(literal) => {
                node.set_attribute(predicate, typed_value(&literal));
            }
            Object::BlankNode(_) => {
                // Anonymous objects outside the association shape carry no
                // attributable value.
                tracing::debug!(
                    subject = %subject,
                    predicate = %predicate,
                    "skipping blank-node object"
                );
            }
        }
    }
}

/// Decode one `prov:qualifiedAssociation` triple into an association record
///
/// The linked Person comes from the subject's `prov:wasAssociatedWith`
/// triples (each agent is imported with its own attributes); the role comes
/// from the association blank node's `prov:hadRole` object. When the role's
/// namespace is unknown, no record is attached and a diagnostic is emitted.
fn import_association(
    graph: &Graph,
    subject: &Subject,
    association: &Object,
    namespaces: &Namespaces,
    node: &mut NodeData,
    unresolved: &mut Vec<Unresolved>,
) {
    let mut person = None;
    for agent in graph.objects_for(subject, &prov::WAS_ASSOCIATED_WITH) {
        let Some(agent_subject) = agent.as_subject() else {
            continue;
        };
        let mut imported = Person::new(local_name(&agent_subject));
        import_attributes(graph, &agent_subject, namespaces, imported.data_mut(), unresolved);
        person = Some(imported);
    }

    let Some(association_subject) = association.as_subject() else {
        return;
    };
    for role in graph.objects_for(&association_subject, &prov::HAD_ROLE) {
        let Some(role_iri) = role.as_named_node() else {
            continue;
        };
        match namespaces.resolve(role_iri.as_str()) {
            Some(qname) => {
                if let Some(person) = &person {
                    node.add_association(Association::new(person.clone(), qname));
                }
            }
            None => {
                tracing::debug!(
                    subject = %subject,
                    role = %role_iri,
                    "dropping association: no namespace binding matches role"
                );
                unresolved.push(Unresolved {
                    subject: subject_repr(subject),
                    predicate: prov::HAD_ROLE.clone(),
                    value: role_iri.as_str().to_string(),
                    kind: UnresolvedKind::Role,
                });
            }
        }
    }
}
