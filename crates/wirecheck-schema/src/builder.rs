use serde_json::{json, Map, Value};

use crate::error::{Result, SchemaError};
use crate::schema::{ContentType, Schema};

/// JSON type a schema, or one of its properties, is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeConstraint {
    Object,
    Array,
    String,
    Int,
    Bool,
    Double,
    Null,
    /// No type restriction.
    Any,
}

impl TypeConstraint {
    fn to_document(self) -> Value {
        let kind = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Int => "integer",
            Self::Bool => "boolean",
            Self::Double => "number",
            Self::Null => "null",
            Self::Any => return json!({}),
        };
        json!({ "type": kind })
    }
}

/// Assembles a schema document one property at a time.
///
/// ```
/// use wirecheck_schema::{ContentType, SchemaBuilder, TypeConstraint};
///
/// let mut builder = SchemaBuilder::new("envelope", ContentType::Json);
/// builder
///     .add_constraint("id", TypeConstraint::String, true)?
///     .add_constraint("expires", TypeConstraint::Int, false)?;
/// let schema = builder.build()?;
///
/// assert_eq!(schema.name(), "envelope");
/// # Ok::<(), wirecheck_schema::SchemaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    content_type: ContentType,
    constraint: TypeConstraint,
    properties: Map<String, Value>,
    required: Vec<String>,
    strict: bool,
}

impl SchemaBuilder {
    /// Start an object schema.
    pub fn new(name: impl Into<String>, content_type: ContentType) -> Self {
        Self::with_type(name, content_type, TypeConstraint::Object)
    }

    /// Start a schema whose root is constrained to `constraint`.
    pub fn with_type(
        name: impl Into<String>,
        content_type: ContentType,
        constraint: TypeConstraint,
    ) -> Self {
        Self {
            name: name.into(),
            content_type,
            constraint,
            properties: Map::new(),
            required: Vec::new(),
            strict: false,
        }
    }

    /// Constrain property `field` to a JSON type.
    pub fn add_constraint(
        &mut self,
        field: impl Into<String>,
        constraint: TypeConstraint,
        required: bool,
    ) -> Result<&mut Self> {
        self.add_property(field.into(), constraint.to_document(), required)
    }

    /// Constrain property `field` to match another schema's document.
    pub fn add_subschema(
        &mut self,
        field: impl Into<String>,
        schema: &Schema,
        required: bool,
    ) -> Result<&mut Self> {
        self.add_property(field.into(), schema.document().clone(), required)
    }

    /// Reject properties that were not added to the builder.
    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Compile the assembled document.
    pub fn build(&self) -> Result<Schema> {
        let document = self.document();
        if self.strict {
            Schema::strict(self.name.clone(), self.content_type, &document)
        } else {
            Schema::new(self.name.clone(), self.content_type, &document)
        }
    }

    /// The document `build` will compile.
    pub fn document(&self) -> Value {
        let mut document = self.constraint.to_document();
        if let Value::Object(map) = &mut document {
            if !self.properties.is_empty() {
                map.insert("properties".to_string(), Value::Object(self.properties.clone()));
            }
            if !self.required.is_empty() {
                map.insert("required".to_string(), json!(self.required));
            }
        }
        document
    }

    fn add_property(&mut self, field: String, document: Value, required: bool) -> Result<&mut Self> {
        if self.constraint != TypeConstraint::Object {
            return Err(SchemaError::InvalidConstraint(format!(
                "schema '{}' is not an object; cannot constrain property '{field}'",
                self.name
            )));
        }

        if required && !self.required.contains(&field) {
            self.required.push(field.clone());
        }
        self.properties.insert(field, document);
        Ok(self)
    }
}
