//! Groups the statements of a graph into one [AttributeRecord] per subject.

use grom_model::{local_id, Graph, InvalidIdentifierError, NamedNode, Object};
use std::collections::BTreeMap;
use tracing::debug;

/// The statements of a single subject, flattened into attributes.
///
/// `attributes` maps the local id of each predicate to either the lexical value of a literal
/// object or the local id of an IRI object. `graph` holds exactly the triples of `subject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    /// The local id of the subject.
    pub id: String,
    pub subject: NamedNode,
    pub attributes: BTreeMap<String, String>,
    pub graph: Graph,
}

impl AttributeRecord {
    /// Returns the value of the attribute with the local id `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Maps `graph` to one [AttributeRecord] per distinct subject, in the order in which the subjects
/// first appear in the graph.
///
/// If a subject has more than one triple with the same predicate, the last one (in graph order)
/// determines the attribute value. All of these triples remain in the record's `graph`.
///
/// ```
/// use grom::io::parse;
/// use grom::statements::map;
///
/// let graph = parse(r#"
///     @prefix schema: <http://id.example.com/schema/> .
///     <http://id.example.com/2> schema:forename "Arya" ; schema:surname "Stark" .
/// "#)?;
/// let records = map(&graph)?;
/// assert_eq!(records[0].id, "2");
/// assert_eq!(records[0].get("forename"), Some("Arya"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn map(graph: &Graph) -> Result<Vec<AttributeRecord>, InvalidIdentifierError> {
    let records = graph
        .subjects()
        .map(|subject| map_subject(graph, subject))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        triples = graph.len(),
        records = records.len(),
        "Mapped statements to records"
    );
    Ok(records)
}

fn map_subject(
    graph: &Graph,
    subject: &NamedNode,
) -> Result<AttributeRecord, InvalidIdentifierError> {
    let mut attributes = BTreeMap::new();
    for triple in graph.triples_for_subject(subject) {
        let value = match &triple.object {
            Object::Literal(literal) => literal.value(),
            Object::NamedNode(node) => local_id(node)?,
        };
        attributes.insert(local_id(&triple.predicate)?.to_owned(), value.to_owned());
    }

    Ok(AttributeRecord {
        id: local_id(subject)?.to_owned(),
        subject: subject.clone(),
        attributes,
        graph: graph.subgraph_for_subject(subject),
    })
}
