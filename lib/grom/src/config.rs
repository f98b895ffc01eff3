/// Holds the configuration of the Turtle codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurtleConfig {
    /// The base IRI used to resolve relative IRIs while parsing.
    pub base_iri: Option<String>,
    /// The prefixes (name, IRI) declared when serializing. Parsing does not need them, as Turtle
    /// documents declare their own prefixes.
    pub prefixes: Vec<(String, String)>,
}

impl TurtleConfig {
    /// Creates a [TurtleConfig] that resolves relative IRIs against `base_iri`.
    #[must_use]
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    /// Adds a prefix that is declared when serializing.
    #[must_use]
    pub fn with_prefix(mut self, name: impl Into<String>, iri: impl Into<String>) -> Self {
        self.prefixes.push((name.into(), iri.into()));
        self
    }
}
