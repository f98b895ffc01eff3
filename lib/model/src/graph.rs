use crate::Triple;
use oxrdf::NamedNode;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::{Display, Formatter};

/// An in-memory [RDF graph](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-graph).
///
/// A [Graph] is a set of [Triple]s. Inserting a triple that is already part of the graph has no
/// effect and two graphs are equal if they contain the same triples, regardless of their order.
///
/// Nevertheless, the graph remembers the order in which triples were inserted. Iterating over a
/// graph (and over its [subjects](Self::subjects)) always follows this insertion order, which is
/// what the mapping operations call "first appearance".
///
/// Usage example:
/// ```
/// use grom_model::{Graph, Literal, NamedNode, Triple};
///
/// let subject = NamedNode::new("http://id.example.com/2")?;
/// let forename = NamedNode::new("http://id.example.com/schema/forename")?;
/// let triple = Triple::new(subject.clone(), forename, Literal::new_simple_literal("Arya"));
///
/// let mut graph = Graph::new();
/// assert!(graph.insert(triple.clone()));
/// assert!(!graph.insert(triple.clone()));
///
/// assert_eq!(graph.len(), 1);
/// assert_eq!(graph.subjects().collect::<Vec<_>>(), vec![&subject]);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    members: FxHashSet<Triple>,
    /// Positions in `triples`, keyed by subject. Iteration order of the keys is not meaningful,
    /// `subjects` keeps the first-appearance order.
    by_subject: FxHashMap<NamedNode, Vec<usize>>,
    subjects: Vec<NamedNode>,
}

impl Graph {
    /// Creates an empty [Graph].
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `triple` into the graph.
    ///
    /// Returns `true` if the triple was not yet part of the graph.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.members.contains(&triple) {
            return false;
        }

        let position = self.triples.len();
        match self.by_subject.get_mut(&triple.subject) {
            Some(positions) => positions.push(position),
            None => {
                self.subjects.push(triple.subject.clone());
                self.by_subject.insert(triple.subject.clone(), vec![position]);
            }
        }
        self.members.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.members.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Iterates over the distinct subjects of the graph in the order of their first appearance.
    pub fn subjects(&self) -> impl Iterator<Item = &NamedNode> {
        self.subjects.iter()
    }

    /// Iterates over the triples whose subject is `subject`, in insertion order.
    pub fn triples_for_subject(&self, subject: &NamedNode) -> impl Iterator<Item = &Triple> {
        self.positions_of(subject)
            .iter()
            .map(|position| &self.triples[*position])
    }

    /// Returns a new graph holding exactly the triples whose subject is `subject`.
    pub fn subgraph_for_subject(&self, subject: &NamedNode) -> Graph {
        self.triples_for_subject(subject).cloned().collect()
    }

    /// Returns a new graph holding the triples of `self` followed by the triples of `other`.
    pub fn union(&self, other: &Graph) -> Graph {
        self.iter().chain(other.iter()).cloned().collect()
    }

    pub(crate) fn positions_of(&self, subject: &NamedNode) -> &[usize] {
        self.by_subject
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|triple| other.contains(triple))
    }
}

impl Eq for Graph {}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for triple in self {
            writeln!(f, "{triple}")?;
        }
        Ok(())
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use oxrdf::{IriParseError, Literal};

    fn person(id: &str, forename: &str) -> Result<Vec<Triple>, IriParseError> {
        let subject = NamedNode::new(format!("http://id.example.com/{id}"))?;
        Ok(vec![
            Triple::new(
                subject.clone(),
                NamedNode::new("http://id.example.com/schema/forename")?,
                Literal::new_simple_literal(forename),
            ),
            Triple::new(
                subject,
                NamedNode::new("http://id.example.com/schema/surname")?,
                Literal::new_simple_literal("Stark"),
            ),
        ])
    }

    #[test]
    fn duplicates_are_ignored() -> Result<(), IriParseError> {
        let mut graph = Graph::new();
        graph.extend(person("1", "Sansa")?);
        graph.extend(person("1", "Sansa")?);
        assert_eq!(graph.len(), 2);
        Ok(())
    }

    #[test]
    fn equality_ignores_order() -> Result<(), IriParseError> {
        let forward: Graph = person("1", "Sansa")?
            .into_iter()
            .chain(person("2", "Arya")?)
            .collect();
        let backward: Graph = person("2", "Arya")?
            .into_iter()
            .rev()
            .chain(person("1", "Sansa")?)
            .collect();
        assert_eq!(forward, backward);

        let smaller: Graph = person("1", "Sansa")?.into_iter().collect();
        assert_ne!(forward, smaller);
        Ok(())
    }

    #[test]
    fn subjects_in_first_appearance_order() -> Result<(), IriParseError> {
        let mut triples = person("2", "Arya")?;
        triples.extend(person("1", "Sansa")?);
        triples.extend(person("2", "Arya")?);
        let graph: Graph = triples.into_iter().collect();

        let subjects = graph
            .subjects()
            .map(NamedNode::as_str)
            .collect::<Vec<_>>();
        assert_eq!(
            subjects,
            vec!["http://id.example.com/2", "http://id.example.com/1"]
        );
        Ok(())
    }

    #[test]
    fn subgraph_only_holds_own_subject() -> Result<(), IriParseError> {
        let graph: Graph = person("1", "Sansa")?
            .into_iter()
            .chain(person("2", "Arya")?)
            .collect();
        let arya = NamedNode::new("http://id.example.com/2")?;

        let subgraph = graph.subgraph_for_subject(&arya);
        assert_eq!(subgraph.len(), 2);
        assert!(subgraph.iter().all(|triple| triple.subject == arya));
        Ok(())
    }

    #[test]
    fn union_merges_without_duplicates() -> Result<(), IriParseError> {
        let sansa: Graph = person("1", "Sansa")?.into_iter().collect();
        let both: Graph = person("1", "Sansa")?
            .into_iter()
            .chain(person("2", "Arya")?)
            .collect();
        assert_eq!(sansa.union(&both), both);
        Ok(())
    }
}
