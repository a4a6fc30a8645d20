/// Errors that can occur while building, registering or applying schemas.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A schema with this name is already registered.
    #[error("schema '{0}' already defined")]
    Redefinition(String),

    /// No schema is registered under this name.
    #[error("'{0}' is not a registered schema")]
    NotFound(String),

    /// The document does not conform to the schema.
    #[error("does not match schema '{schema}': {message}")]
    ValidationFailed { schema: String, message: String },

    /// The schema document could not be compiled.
    #[error("failed to compile schema '{name}': {reason}")]
    CompileFailed { name: String, reason: String },

    /// A property constraint was added to a schema that cannot hold one.
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    /// The content type name is not recognized.
    #[error("unknown content type: {0}")]
    UnknownContentType(String),

    /// A schema file could not be loaded.
    #[error("failed to load schema: {0}")]
    LoadFailed(String),

    /// The schema text is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
