//! Closing object schemas against undeclared properties.

use serde_json::{Map, Value};

/// Keywords whose value maps names to sub-schemas.
const SUBSCHEMA_MAPS: &[&str] = &[
    "properties",
    "patternProperties",
    "dependentSchemas",
    "$defs",
    "definitions",
];

/// Keywords whose value is a sub-schema or a list of sub-schemas.
const SUBSCHEMAS: &[&str] = &[
    "additionalProperties",
    "unevaluatedProperties",
    "propertyNames",
    "items",
    "prefixItems",
    "additionalItems",
    "unevaluatedItems",
    "contains",
    "allOf",
    "anyOf",
    "oneOf",
    "not",
    "if",
    "then",
    "else",
];

/// Keywords that only apply to objects; a schema using one without a
/// `type` describes an object.
const OBJECT_KEYWORDS: &[&str] = &[
    "properties",
    "patternProperties",
    "additionalProperties",
    "unevaluatedProperties",
    "required",
    "dependentRequired",
    "dependentSchemas",
    "propertyNames",
];

/// Set `additionalProperties: false` on every object schema in `document`
/// that does not already state whether extra properties are allowed.
pub(crate) fn close_object_schemas(document: &mut Value) {
    let mut pending = vec![document];
    while let Some(node) = pending.pop() {
        match node {
            Value::Array(schemas) => pending.extend(schemas.iter_mut()),
            Value::Object(schema) => {
                if describes_object(schema) {
                    schema
                        .entry("additionalProperties")
                        .or_insert(Value::Bool(false));
                }
                for (keyword, child) in schema.iter_mut() {
                    let keyword = keyword.as_str();
                    if SUBSCHEMA_MAPS.contains(&keyword) {
                        if let Value::Object(named) = child {
                            pending.extend(named.values_mut());
                        }
                    } else if SUBSCHEMAS.contains(&keyword) {
                        pending.push(child);
                    }
                }
            }
            _ => {}
        }
    }
}

fn describes_object(schema: &Map<String, Value>) -> bool {
    match schema.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind.as_str() == Some("object")),
        _ => OBJECT_KEYWORDS
            .iter()
            .any(|keyword| schema.contains_key(*keyword)),
    }
}
