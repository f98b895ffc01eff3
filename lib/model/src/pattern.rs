use crate::{Graph, Object, Triple};
use itertools::Either;
use oxrdf::NamedNode;

/// A triple pattern where every position is either bound to a term or left open.
///
/// ```
/// use grom_model::{NamedNode, TriplePattern};
/// use grom_model::vocab::rdf;
///
/// let party = NamedNode::new("http://id.example.com/23")?;
/// let pattern = TriplePattern::any()
///     .with_subject(party)
///     .with_predicate(rdf::TYPE);
/// assert!(pattern.object.is_none());
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TriplePattern {
    pub subject: Option<NamedNode>,
    pub predicate: Option<NamedNode>,
    pub object: Option<Object>,
}

impl TriplePattern {
    /// Creates a pattern that matches every triple.
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<NamedNode>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: impl Into<NamedNode>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    #[must_use]
    pub fn with_object(mut self, object: impl Into<Object>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Returns whether `triple` agrees with every bound position of this pattern.
    pub fn matches(&self, triple: &Triple) -> bool {
        self.subject
            .as_ref()
            .map_or(true, |subject| *subject == triple.subject)
            && self
                .predicate
                .as_ref()
                .map_or(true, |predicate| *predicate == triple.predicate)
            && self
                .object
                .as_ref()
                .map_or(true, |object| *object == triple.object)
    }
}

/// The minimal triple store interface the mapping operations rely on.
///
/// Implementors only need to answer triple pattern queries and membership tests. How they do that
/// (linear scan, hash index, B-tree) is up to them.
pub trait TripleMatcher {
    /// Iterates over all triples that match `pattern`.
    fn triples_matching(&self, pattern: TriplePattern) -> impl Iterator<Item = &Triple>;

    /// Returns whether `triple` is part of the store.
    fn contains_triple(&self, triple: &Triple) -> bool;

    /// Returns the object of the first triple that matches `pattern`.
    fn first_object(&self, pattern: TriplePattern) -> Option<&Object> {
        self.triples_matching(pattern)
            .next()
            .map(|triple| &triple.object)
    }

    /// Collects all triples that match `pattern` into a new [Graph].
    fn query(&self, pattern: TriplePattern) -> Graph {
        self.triples_matching(pattern).cloned().collect()
    }
}

impl TripleMatcher for Graph {
    fn triples_matching(&self, pattern: TriplePattern) -> impl Iterator<Item = &Triple> {
        let candidates = match pattern.subject.as_ref() {
            Some(subject) => Either::Left(self.triples_for_subject(subject)),
            None => Either::Right(self.iter()),
        };
        candidates.filter(move |triple| pattern.matches(triple))
    }

    fn contains_triple(&self, triple: &Triple) -> bool {
        self.contains(triple)
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use oxrdf::vocab::{rdf, xsd};
    use oxrdf::{IriParseError, Literal, NamedNodeRef};

    fn membership() -> Result<Graph, IriParseError> {
        let membership = NamedNode::new("http://id.example.com/25")?;
        Ok([
            Triple::new(
                membership.clone(),
                rdf::TYPE,
                NamedNode::new("http://id.example.com/schema/DummyPartyMembership")?,
            ),
            Triple::new(
                membership.clone(),
                NamedNode::new("http://id.example.com/schema/partyMembershipStartDate")?,
                Literal::new_typed_literal("1953-01-12", xsd::DATE),
            ),
            Triple::new(
                membership,
                NamedNode::new("http://id.example.com/schema/partyMembershipHasParty")?,
                NamedNode::new("http://id.example.com/23")?,
            ),
        ]
        .into_iter()
        .collect())
    }

    #[test]
    fn open_pattern_matches_everything() -> Result<(), IriParseError> {
        let graph = membership()?;
        assert_eq!(graph.triples_matching(TriplePattern::any()).count(), 3);
        Ok(())
    }

    #[test]
    fn bound_subject_and_predicate() -> Result<(), IriParseError> {
        let graph = membership()?;
        let pattern = TriplePattern::any()
            .with_subject(NamedNodeRef::new("http://id.example.com/25")?)
            .with_predicate(rdf::TYPE);
        assert_eq!(
            graph.first_object(pattern).map(Object::value),
            Some("http://id.example.com/schema/DummyPartyMembership")
        );
        Ok(())
    }

    #[test]
    fn unknown_subject_matches_nothing() -> Result<(), IriParseError> {
        let graph = membership()?;
        let pattern =
            TriplePattern::any().with_subject(NamedNodeRef::new("http://id.example.com/23")?);
        assert!(graph.query(pattern).is_empty());
        Ok(())
    }

    #[test]
    fn bound_object() -> Result<(), IriParseError> {
        let graph = membership()?;
        let pattern =
            TriplePattern::any().with_object(NamedNodeRef::new("http://id.example.com/23")?);
        let matches = graph.query(pattern);
        assert_eq!(matches.len(), 1);
        assert!(matches
            .iter()
            .next()
            .is_some_and(|triple| graph.contains_triple(triple)));
        Ok(())
    }
}
