//! Splits a graph that describes an associated entity and a through entity into one graph per
//! entity.

use crate::error::{SplitError, StructuralMismatchError};
use grom_model::vocab::rdf;
use grom_model::{local_id, Graph, NamedNode, Object, TripleMatcher, TriplePattern};
use tracing::debug;

/// The result of [split_by_subject].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// All triples of the subject typed with the associated class.
    pub associated_class_graph: Graph,
    /// All triples of the other typed subject, including the link to the associated entity.
    pub through_graph: Graph,
}

impl SplitResult {
    /// Merges both graphs back into a single graph.
    pub fn into_graph(self) -> Graph {
        let mut graph = self.associated_class_graph;
        graph.extend(self.through_graph);
        graph
    }
}

/// Splits `graph` into the graph of the associated entity and the graph of the through entity.
///
/// The input must contain exactly two subjects with an `rdf:type` statement. One of them must be
/// typed with a class whose local id is `associated_class_name`, the other one is the through
/// entity. Every triple of the input ends up in the graph of its subject, hence each side keeps
/// its own type statement and never receives the type statement of the other side.
///
/// Graphs of any other shape are rejected with a [StructuralMismatchError] instead of being split
/// on a best-effort basis.
///
/// ```
/// use grom::io::parse;
/// use grom::split::split_by_subject;
///
/// let graph = parse(r#"
///     @prefix schema: <http://id.example.com/schema/> .
///     <http://id.example.com/23> a schema:DummyParty ; schema:partyName "Targaryens" .
///     <http://id.example.com/25> a schema:DummyPartyMembership ;
///         schema:partyMembershipHasParty <http://id.example.com/23> .
/// "#)?;
/// let split = split_by_subject(&graph, "DummyParty")?;
/// assert_eq!(split.associated_class_graph.len(), 2);
/// assert_eq!(split.through_graph.len(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn split_by_subject(
    graph: &Graph,
    associated_class_name: &str,
) -> Result<SplitResult, SplitError> {
    let mut typed = Vec::new();
    let mut untyped = Vec::new();
    for subject in graph.subjects() {
        match is_instance_of(graph, subject, associated_class_name)? {
            Some(is_associated) => typed.push((subject, is_associated)),
            None => untyped.push(subject),
        }
    }

    let [first, second] = typed.as_slice() else {
        return Err(StructuralMismatchError::TypedSubjectCount { found: typed.len() }.into());
    };
    let (associated, through) = match (first.1, second.1) {
        (true, false) => (first.0, second.0),
        (false, true) => (second.0, first.0),
        (true, true) => {
            return Err(StructuralMismatchError::AmbiguousAssociatedClass {
                class: associated_class_name.to_owned(),
            }
            .into())
        }
        (false, false) => {
            return Err(StructuralMismatchError::MissingAssociatedClass {
                class: associated_class_name.to_owned(),
            }
            .into())
        }
    };
    if let Some(subject) = untyped.first() {
        return Err(StructuralMismatchError::UntypedSubject {
            subject: subject.as_str().to_owned(),
        }
        .into());
    }

    let mut result = SplitResult::default();
    for triple in graph {
        if triple.subject == *associated {
            result.associated_class_graph.insert(triple.clone());
        } else if triple.subject == *through {
            result.through_graph.insert(triple.clone());
        }
    }

    debug!(
        associated_class_name,
        associated = associated.as_str(),
        through = through.as_str(),
        "Split graph by subject"
    );
    Ok(result)
}

/// Returns `None` if `subject` has no type, otherwise whether one of its types has the local id
/// `class_name`.
fn is_instance_of(
    graph: &Graph,
    subject: &NamedNode,
    class_name: &str,
) -> Result<Option<bool>, SplitError> {
    let pattern = TriplePattern::any()
        .with_subject(subject.clone())
        .with_predicate(rdf::TYPE);

    let mut is_instance = None;
    for triple in graph.triples_matching(pattern) {
        let matches = match &triple.object {
            Object::NamedNode(class) => local_id(class)? == class_name,
            Object::Literal(_) => false,
        };
        is_instance = Some(is_instance.unwrap_or(false) || matches);
    }
    Ok(is_instance)
}
