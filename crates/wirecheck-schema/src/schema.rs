use std::fmt;
use std::str::FromStr;

use jsonschema::Validator;
use serde_json::Value;
use wirecheck_data::DataContainer;

use crate::error::{Result, SchemaError};
use crate::strict::close_object_schemas;

/// Wire encoding of the messages a schema applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Messages travel as JSON text.
    Json,
    /// Messages travel in a binary encoding such as MessagePack.
    Binary,
}

impl ContentType {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "binary" => Ok(Self::Binary),
            _ => Err(SchemaError::UnknownContentType(s.to_string())),
        }
    }
}

/// A named, compiled JSON Schema.
///
/// The document is compiled at construction, so an invalid schema is
/// reported here rather than at validation time. A `Schema` cannot be
/// modified once built.
pub struct Schema {
    name: String,
    content_type: ContentType,
    document: Value,
    validator: Validator,
}

impl Schema {
    /// Compile `document` into a schema called `name`.
    pub fn new(name: impl Into<String>, content_type: ContentType, document: &Value) -> Result<Self> {
        Self::compile(name.into(), content_type, document.clone())
    }

    /// Like [`Schema::new`], but every object schema in `document` that does
    /// not say otherwise rejects undeclared properties.
    pub fn strict(
        name: impl Into<String>,
        content_type: ContentType,
        document: &Value,
    ) -> Result<Self> {
        let mut document = document.clone();
        close_object_schemas(&mut document);
        Self::compile(name.into(), content_type, document)
    }

    /// Parse and compile a schema from JSON text.
    pub fn from_json(name: impl Into<String>, content_type: ContentType, text: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(text)?;
        Self::compile(name.into(), content_type, document)
    }

    /// Compile the document held by a data container.
    pub fn from_container(
        name: impl Into<String>,
        content_type: ContentType,
        document: &DataContainer,
    ) -> Result<Self> {
        Self::new(name, content_type, document.as_value())
    }

    fn compile(name: String, content_type: ContentType, document: Value) -> Result<Self> {
        let validator = jsonschema::validator_for(&document).map_err(|err| {
            SchemaError::CompileFailed {
                name: name.clone(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            name,
            content_type,
            document,
            validator,
        })
    }

    /// Name the schema registers under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wire encoding of the messages this schema applies to.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The schema document as compiled.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The compiled validator handed to the engine.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}
