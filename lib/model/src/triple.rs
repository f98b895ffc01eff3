use crate::UnsupportedTermError;
use oxrdf::{Literal, LiteralRef, NamedNode, NamedNodeRef, Subject, Term, TermRef, TripleRef};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// The object of a [Triple]: either a reference to another resource or a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    NamedNode(NamedNode),
    Literal(Literal),
}

impl Object {
    /// Returns the IRI if this object references another resource.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Object::NamedNode(node) => Some(node),
            Object::Literal(_) => None,
        }
    }

    /// Returns the literal if this object is a literal value.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::NamedNode(_) => None,
            Object::Literal(literal) => Some(literal),
        }
    }

    pub fn as_ref(&self) -> TermRef<'_> {
        match self {
            Object::NamedNode(node) => TermRef::NamedNode(node.as_ref()),
            Object::Literal(literal) => TermRef::Literal(literal.as_ref()),
        }
    }

    /// Returns the lexical value of a literal or the IRI of a named node.
    pub fn value(&self) -> &str {
        match self {
            Object::NamedNode(node) => node.as_str(),
            Object::Literal(literal) => literal.value(),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_ref().fmt(f)
    }
}

/// IRIs sort before literals. IRIs are compared by their string, literals by their lexical value,
/// datatype and language tag.
impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Object::NamedNode(lhs), Object::NamedNode(rhs)) => lhs.as_str().cmp(rhs.as_str()),
            (Object::NamedNode(_), Object::Literal(_)) => Ordering::Less,
            (Object::Literal(_), Object::NamedNode(_)) => Ordering::Greater,
            (Object::Literal(lhs), Object::Literal(rhs)) => lhs
                .value()
                .cmp(rhs.value())
                .then_with(|| lhs.datatype().as_str().cmp(rhs.datatype().as_str()))
                .then_with(|| lhs.language().cmp(&rhs.language())),
        }
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<NamedNode> for Object {
    fn from(node: NamedNode) -> Self {
        Object::NamedNode(node)
    }
}

impl From<NamedNodeRef<'_>> for Object {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Object::NamedNode(node.into_owned())
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

impl From<LiteralRef<'_>> for Object {
    fn from(literal: LiteralRef<'_>) -> Self {
        Object::Literal(literal.into_owned())
    }
}

impl From<Object> for Term {
    fn from(object: Object) -> Self {
        match object {
            Object::NamedNode(node) => Term::NamedNode(node),
            Object::Literal(literal) => Term::Literal(literal),
        }
    }
}

impl TryFrom<Term> for Object {
    type Error = UnsupportedTermError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::NamedNode(node) => Ok(Object::NamedNode(node)),
            Term::Literal(literal) => Ok(Object::Literal(literal)),
            other => Err(UnsupportedTermError::new(other.to_string())),
        }
    }
}

/// An RDF triple whose subject is an IRI and whose object is an IRI or a literal.
///
/// Contrary to [oxrdf::Triple], blank nodes cannot appear in a [Triple].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: NamedNode,
    pub predicate: NamedNode,
    pub object: Object,
}

impl Triple {
    pub fn new(
        subject: impl Into<NamedNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Object>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Returns a borrowed oxrdf view of this triple, e.g., for handing it to a serializer.
    pub fn as_oxrdf(&self) -> TripleRef<'_> {
        TripleRef::new(self.subject.as_ref(), self.predicate.as_ref(), self.object.as_ref())
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

impl Ord for Triple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.subject
            .as_str()
            .cmp(other.subject.as_str())
            .then_with(|| self.predicate.as_str().cmp(other.predicate.as_str()))
            .then_with(|| self.object.cmp(&other.object))
    }
}

impl PartialOrd for Triple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<oxrdf::Triple> for Triple {
    type Error = UnsupportedTermError;

    fn try_from(triple: oxrdf::Triple) -> Result<Self, Self::Error> {
        let subject = match triple.subject {
            Subject::NamedNode(node) => node,
            other => return Err(UnsupportedTermError::new(other.to_string())),
        };
        Ok(Self {
            subject,
            predicate: triple.predicate,
            object: Object::try_from(triple.object)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;
    use oxrdf::{BlankNode, IriParseError};

    #[test]
    fn literal_equality_includes_datatype() {
        let date = Object::from(LiteralRef::new_typed_literal("1953-01-12", xsd::DATE));
        let string = Object::from(Literal::new_simple_literal("1953-01-12"));
        assert_ne!(date, string);
        assert_eq!(date.value(), string.value());
    }

    #[test]
    fn iris_sort_before_literals() -> Result<(), IriParseError> {
        let iri = Object::from(NamedNode::new("http://id.example.com/23")?);
        let literal = Object::from(Literal::new_simple_literal("23"));
        assert!(iri < literal);

        let date = Object::from(LiteralRef::new_typed_literal("23", xsd::INTEGER));
        assert_ne!(literal.cmp(&date), Ordering::Equal);
        Ok(())
    }

    #[test]
    fn from_oxrdf_triple() -> Result<(), Box<dyn std::error::Error>> {
        let subject = NamedNode::new("http://id.example.com/1")?;
        let predicate = NamedNode::new("http://id.example.com/schema/forename")?;
        let triple = Triple::try_from(oxrdf::Triple::new(
            subject.clone(),
            predicate.clone(),
            Literal::new_simple_literal("Daenerys"),
        ))?;
        assert_eq!(
            triple,
            Triple::new(subject, predicate, Literal::new_simple_literal("Daenerys"))
        );
        Ok(())
    }

    #[test]
    fn blank_nodes_are_rejected() -> Result<(), IriParseError> {
        let predicate = NamedNode::new("http://id.example.com/schema/knows")?;
        let subject_blank = oxrdf::Triple::new(
            BlankNode::default(),
            predicate.clone(),
            NamedNode::new("http://id.example.com/2")?,
        );
        Triple::try_from(subject_blank).unwrap_err();

        let object_blank = oxrdf::Triple::new(
            NamedNode::new("http://id.example.com/1")?,
            predicate,
            BlankNode::default(),
        );
        Triple::try_from(object_blank).unwrap_err();
        Ok(())
    }

    #[test]
    fn display_is_ntriples_like() -> Result<(), IriParseError> {
        let triple = Triple::new(
            NamedNode::new("http://id.example.com/1")?,
            NamedNode::new("http://id.example.com/schema/surname")?,
            Literal::new_simple_literal("Stark"),
        );
        assert_eq!(
            triple.to_string(),
            "<http://id.example.com/1> <http://id.example.com/schema/surname> \"Stark\" ."
        );
        Ok(())
    }
}
