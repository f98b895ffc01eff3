use grom_model::{IriParseError, UnsupportedTermError};
use oxrdfio::RdfParseError;
use std::io;

pub use grom_model::InvalidIdentifierError;

/// An error raised while parsing Turtle into a [`Graph`](crate::model::Graph).
///
/// Parsing is all-or-nothing: if this error is returned, no triple of the input was kept.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not valid Turtle.
    #[error(transparent)]
    Syntax(#[from] RdfParseError),
    /// The input uses a term that cannot be stored in a graph (e.g., a blank node).
    #[error(transparent)]
    UnsupportedTerm(#[from] UnsupportedTermError),
    /// The parser produced a triple inside a named graph.
    #[error("Only the default graph is supported, found a triple in graph {0}")]
    NamedGraph(String),
    /// The base IRI is invalid.
    #[error("Invalid base IRI '{iri}': {error}")]
    InvalidBaseIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
}

impl From<ParseError> for io::Error {
    #[inline]
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Syntax(error) => error.into(),
            ParseError::UnsupportedTerm(_)
            | ParseError::NamedGraph(_)
            | ParseError::InvalidBaseIri { .. } => {
                Self::new(io::ErrorKind::InvalidData, error.to_string())
            }
        }
    }
}

/// An error raised while writing a [`Graph`](crate::model::Graph) as Turtle.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// An error raised while writing the content.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A configured prefix does not map to a valid IRI.
    #[error("Invalid IRI '{iri}' for prefix '{prefix}': {error}")]
    InvalidPrefix {
        prefix: String,
        iri: String,
        #[source]
        error: IriParseError,
    },
}

/// Raised when a graph does not have the shape required by
/// [`split_by_subject`](crate::split::split_by_subject).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralMismatchError {
    /// The graph must contain exactly two subjects with an `rdf:type` statement.
    #[error("Expected exactly two typed subjects, found {found}")]
    TypedSubjectCount { found: usize },
    /// None of the typed subjects is an instance of the associated class.
    #[error("No subject is typed with the associated class '{class}'")]
    MissingAssociatedClass { class: String },
    /// Both typed subjects are instances of the associated class.
    #[error("Both subjects are typed with the associated class '{class}'")]
    AmbiguousAssociatedClass { class: String },
    /// The graph contains statements about a subject without an `rdf:type` statement.
    #[error("The subject <{subject}> has no type and belongs to neither side of the split")]
    UntypedSubject { subject: String },
}

/// An error raised while splitting a graph by subject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error(transparent)]
    Identifier(#[from] InvalidIdentifierError),
    #[error(transparent)]
    Structure(#[from] StructuralMismatchError),
}

/// Any error raised by the operations of a [`GraphMapper`](crate::mapper::GraphMapper).
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Identifier(#[from] InvalidIdentifierError),
    #[error(transparent)]
    Structure(#[from] StructuralMismatchError),
}

impl From<SplitError> for MapperError {
    fn from(error: SplitError) -> Self {
        match error {
            SplitError::Identifier(error) => MapperError::Identifier(error),
            SplitError::Structure(error) => MapperError::Structure(error),
        }
    }
}
