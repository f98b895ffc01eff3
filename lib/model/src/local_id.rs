use crate::InvalidIdentifierError;
use oxrdf::vocab::rdf;
use oxrdf::NamedNodeRef;

/// The local id of the `rdf:type` predicate.
pub const RDF_TYPE_LOCAL_ID: &str = "type";

/// Returns the local id of `uri`, i.e., the segment after its last `/`.
///
/// The `rdf:type` IRI always has the local id [RDF_TYPE_LOCAL_ID]. This does not depend on how
/// the IRI of `rdf:type` is structured.
///
/// ```
/// use grom_model::{local_id, NamedNodeRef};
/// use grom_model::vocab::rdf;
///
/// let person = NamedNodeRef::new("http://id.example.com/123")?;
/// assert_eq!(local_id(person)?, "123");
/// assert_eq!(local_id(rdf::TYPE)?, "type");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn local_id<'uri>(
    uri: impl Into<NamedNodeRef<'uri>>,
) -> Result<&'uri str, InvalidIdentifierError> {
    let uri = uri.into();
    if uri == rdf::TYPE {
        return Ok(RDF_TYPE_LOCAL_ID);
    }

    match uri.as_str().rsplit_once('/') {
        Some((_, id)) if !id.is_empty() => Ok(id),
        _ => Err(InvalidIdentifierError::new(uri.as_str())),
    }
}
