//! The [GraphMapper] trait bundles all mapping operations behind a single interface.
//!
//! Usage example:
//! ```
//! use grom::mapper::{GraphMapper, Mapper};
//!
//! let mapper = Mapper::default();
//! let graph = mapper.parse(r#"
//!     @prefix schema: <http://id.example.com/schema/> .
//!     <http://id.example.com/1> schema:forename "Daenerys" .
//!     <http://id.example.com/2> schema:forename "Arya" .
//! "#)?;
//!
//! let records = mapper.map(&graph)?;
//! assert_eq!(records.len(), 2);
//! assert_eq!(mapper.local_id(&records[1].subject)?, "2");
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::config::TurtleConfig;
use crate::error::{InvalidIdentifierError, ParseError, SerializeError, SplitError};
use crate::split::SplitResult;
use crate::statements::AttributeRecord;
use crate::{io, split, statements, through};
use grom_model::{Graph, NamedNodeRef};

/// The operations offered to an object-mapping layer.
///
/// All operations are provided and stateless apart from the [TurtleConfig] used by the codec.
/// Implementors usually only implement [GraphMapper::turtle_config].
pub trait GraphMapper {
    /// The configuration used by [GraphMapper::parse] and [GraphMapper::serialize].
    fn turtle_config(&self) -> &TurtleConfig;

    /// See [io::parse_with].
    fn parse(&self, text: &str) -> Result<Graph, ParseError> {
        io::parse_with(text, self.turtle_config())
    }

    /// See [io::serialize_with].
    fn serialize(&self, graph: &Graph) -> Result<String, SerializeError> {
        io::serialize_with(graph, self.turtle_config())
    }

    /// See [grom_model::local_id].
    fn local_id<'uri>(
        &self,
        uri: impl Into<NamedNodeRef<'uri>>,
    ) -> Result<&'uri str, InvalidIdentifierError> {
        grom_model::local_id(uri)
    }

    /// See [statements::map].
    fn map(&self, graph: &Graph) -> Result<Vec<AttributeRecord>, InvalidIdentifierError> {
        statements::map(graph)
    }

    /// See [through::through_graphs].
    fn through_graphs(
        &self,
        graph: &Graph,
        associated_id: &str,
    ) -> Result<Vec<Graph>, InvalidIdentifierError> {
        through::through_graphs(graph, associated_id)
    }

    /// See [split::split_by_subject].
    fn split_by_subject(
        &self,
        graph: &Graph,
        associated_class_name: &str,
    ) -> Result<SplitResult, SplitError> {
        split::split_by_subject(graph, associated_class_name)
    }
}

/// The default [GraphMapper].
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: TurtleConfig,
}

impl Mapper {
    /// Creates a [Mapper] whose codec uses `config`.
    pub fn with_config(config: TurtleConfig) -> Self {
        Self { config }
    }
}

impl GraphMapper for Mapper {
    fn turtle_config(&self) -> &TurtleConfig {
        &self.config
    }
}
