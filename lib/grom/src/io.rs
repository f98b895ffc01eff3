//! Reading and writing [Graph]s as [Turtle](https://www.w3.org/TR/turtle/).
//!
//! Usage example:
//! ```
//! use grom::io::{parse, serialize};
//!
//! let graph = parse(
//!     "<http://id.example.com/1> <http://id.example.com/schema/forename> 'Daenerys' .",
//! )?;
//! assert_eq!(graph.len(), 1);
//!
//! // Single-quoted literals are written back with standard quoting.
//! let turtle = serialize(&graph)?;
//! assert!(turtle.contains("\"Daenerys\""));
//! assert_eq!(parse(&turtle)?, graph);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::config::TurtleConfig;
use crate::error::{ParseError, SerializeError};
use grom_model::{DecodedTriple, Graph, Triple};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use std::io;
use tracing::{debug, trace};

/// Parses a Turtle document into a [Graph] using the default [TurtleConfig].
pub fn parse(text: &str) -> Result<Graph, ParseError> {
    parse_with(text, &TurtleConfig::default())
}

/// Parses a Turtle document into a [Graph].
///
/// Literals may be quoted with double or single quotes, both lead to the same literal. The
/// triples of the graph keep the order of the document.
///
/// Parsing is atomic: on the first error the partially parsed graph is dropped and the error is
/// returned. Blank nodes are not supported and cause a [ParseError::UnsupportedTerm].
pub fn parse_with(text: &str, config: &TurtleConfig) -> Result<Graph, ParseError> {
    let mut parser = RdfParser::from_format(RdfFormat::Turtle);
    if let Some(base_iri) = &config.base_iri {
        parser = parser
            .with_base_iri(base_iri.as_str())
            .map_err(|error| ParseError::InvalidBaseIri {
                iri: base_iri.clone(),
                error,
            })?;
    }

    let mut graph = Graph::new();
    for quad in parser.for_reader(text.as_bytes()) {
        let quad = quad?;
        if !quad.graph_name.is_default_graph() {
            return Err(ParseError::NamedGraph(quad.graph_name.to_string()));
        }
        let triple = DecodedTriple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(Triple::try_from(triple)?);
    }

    debug!(triples = graph.len(), "Parsed Turtle document");
    Ok(graph)
}

/// Serializes `graph` as Turtle using the default [TurtleConfig].
pub fn serialize(graph: &Graph) -> Result<String, SerializeError> {
    serialize_with(graph, &TurtleConfig::default())
}

/// Serializes `graph` as Turtle, declaring the prefixes of `config`.
///
/// The output only depends on the set of triples: they are written sorted by subject, predicate
/// and object, so that equal graphs always produce the same document.
pub fn serialize_with(graph: &Graph, config: &TurtleConfig) -> Result<String, SerializeError> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, iri) in &config.prefixes {
        serializer = serializer
            .with_prefix(prefix.as_str(), iri.as_str())
            .map_err(|error| SerializeError::InvalidPrefix {
                prefix: prefix.clone(),
                iri: iri.clone(),
                error,
            })?;
    }

    let mut triples = graph.iter().collect::<Vec<_>>();
    triples.sort_unstable();

    let mut writer = serializer.for_writer(Vec::new());
    for triple in triples {
        trace!(%triple, "Serializing triple");
        writer.serialize_triple(triple.as_oxrdf())?;
    }
    let buffer = writer.finish()?;

    debug!(triples = graph.len(), "Serialized graph as Turtle");
    String::from_utf8(buffer)
        .map_err(|error| SerializeError::Io(io::Error::new(io::ErrorKind::InvalidData, error)))
}
