use thiserror::Error;

/// Raised when no local id can be derived from an IRI.
///
/// A local id is the non-empty segment after the last `/` of an IRI. IRIs such as
/// `urn:isbn:0451450523` (no `/` at all) or `http://example.com/people/` (empty last segment) do
/// not have one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unable to derive a local id from the IRI <{uri}>")]
pub struct InvalidIdentifierError {
    uri: String,
}

impl InvalidIdentifierError {
    /// Creates a new [InvalidIdentifierError] for the given `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// The IRI that has no local id.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Raised when converting an RDF term that cannot be represented in a [Graph](crate::Graph).
///
/// Only IRIs can be used as subjects and only IRIs or literals can be used as objects. Blank nodes
/// and quoted triples are rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("The term {term} is not supported, only IRIs and literals can be used")]
pub struct UnsupportedTermError {
    term: String,
}

impl UnsupportedTermError {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// The rejected term, in its N-Triples representation.
    pub fn term(&self) -> &str {
        &self.term
    }
}
