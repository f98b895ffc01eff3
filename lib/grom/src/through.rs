//! Discovers the "through" entities of a many-to-many relationship.
//!
//! A through entity (e.g., a party membership) links an associated entity (e.g., a party) with
//! another entity and carries the attributes of the relationship itself (e.g., start and end
//! dates). It references the associated entity with an IRI whose local id is the id of the
//! associated entity.

use grom_model::{local_id, Graph, InvalidIdentifierError, NamedNode};
use tracing::debug;

/// Returns the subgraphs of all subjects of `graph` that reference a resource whose local id is
/// `associated_id`.
///
/// Each returned graph holds every triple of one such subject. The graphs are ordered by the first
/// appearance of their subject. If no subject references `associated_id`, the result is empty.
///
/// Every IRI object of every subject must have a local id, whether or not it matches
/// `associated_id`. The first one that does not is returned as the error.
pub fn through_graphs(
    graph: &Graph,
    associated_id: &str,
) -> Result<Vec<Graph>, InvalidIdentifierError> {
    let mut result = Vec::new();
    for subject in graph.subjects() {
        if references(graph, subject, associated_id)? {
            result.push(graph.subgraph_for_subject(subject));
        }
    }

    debug!(
        associated_id,
        through_graphs = result.len(),
        "Collected through graphs"
    );
    Ok(result)
}

fn references(
    graph: &Graph,
    subject: &NamedNode,
    associated_id: &str,
) -> Result<bool, InvalidIdentifierError> {
    let mut found = false;
    for object in graph
        .triples_for_subject(subject)
        .filter_map(|triple| triple.object.as_named_node())
    {
        found |= local_id(object)? == associated_id;
    }
    Ok(found)
}
