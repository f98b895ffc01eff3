mod error;
mod graph;
mod local_id;
mod pattern;
mod triple;

pub use error::*;
pub use graph::Graph;
pub use local_id::{local_id, RDF_TYPE_LOCAL_ID};
pub use pattern::{TripleMatcher, TriplePattern};
pub use triple::{Object, Triple};

// Re-export some oxrdf types.
pub use oxrdf::vocab;
pub use oxrdf::Term as DecodedTerm;
pub use oxrdf::Triple as DecodedTriple;
pub use oxrdf::{
    IriParseError, Literal, LiteralRef, NamedNode, NamedNodeRef, Quad, Subject, Term, TermRef,
    TripleRef,
};
