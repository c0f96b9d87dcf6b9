//! # NIDM Experiment
//!
//! Decoding of NIDM-Experiment RDF/PROV documents into a typed, hierarchical
//! experiment record (Project → Session → Acquisition → AcquisitionObject, with
//! Person/Role associations).
//!
//! The document arrives as an already-parsed triple set ([`graph::Graph`]); the
//! decoder walks it, infers the hierarchy and acquisition subtypes from the
//! constellation of triples around each subject, and returns a [`Project`]
//! together with diagnostics for every attribute it had to drop because no
//! namespace binding matched.
//!
//! ## Examples
//!
//! ```rust
//! use nidm_experiment::graph::Graph;
//! use nidm_experiment::model::{NamedNode, Triple};
//! use nidm_experiment::vocab::{nidm, rdf};
//! use nidm_experiment::ExperimentNode;
//!
//! # fn main() -> nidm_experiment::Result<()> {
//! let mut graph = Graph::new();
//! graph.add_triple(Triple::new(
//!     NamedNode::new("http://example.org/proj_1")?,
//!     rdf::TYPE.clone(),
//!     nidm::PROJECT.clone(),
//! ));
//! let outcome = nidm_experiment::decode(&graph)?;
//! assert_eq!(outcome.project.id(), "proj_1");
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod experiment;
pub mod graph;
pub mod model;
pub mod namespace;
pub mod vocab;

// Re-export the main entry point and record types for convenience
pub use decode::{decode, DecodeOutcome, Unresolved, UnresolvedKind};
pub use experiment::{
    Acquisition, AcquisitionKind, AcquisitionObject, AcquisitionObjectKind, Association,
    ExperimentNode, Person, Project, Session,
};

/// Core error type for NIDM experiment operations
#[derive(Debug, thiserror::Error)]
pub enum NidmError {
    #[error("no Project-typed subject found in source graph")]
    MissingProject,
    #[error("Invalid IRI: {0}")]
    Iri(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for NIDM experiment operations
pub type Result<T> = std::result::Result<T, NidmError>;

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the crate with default configuration
pub fn init() -> Result<()> {
    tracing::info!("Initializing nidm-experiment v{}", VERSION);
    Ok(())
}
