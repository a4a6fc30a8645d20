use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::schema::Schema;

/// Separator placed between numbered errors.
pub const ERROR_SEPARATOR: &str = "  - ";

/// Run the engine and fail with every reported error when the instance does
/// not conform.
pub(crate) fn validate_instance(schema: &Schema, instance: &Value) -> Result<()> {
    let errors = schema
        .validator()
        .iter_errors(instance)
        .map(|err| vec![instance_location(err.instance_path().as_str()), err.to_string()]);
    let message = format_errors(errors);

    if message.is_empty() {
        return Ok(());
    }

    debug!(schema = schema.name(), %message, "schema validation failure");
    Err(SchemaError::ValidationFailed {
        schema: schema.name().to_string(),
        message,
    })
}

// JSON pointer of the failing value; the empty pointer names the root.
fn instance_location(pointer: &str) -> String {
    if pointer.is_empty() {
        "<root>".to_string()
    } else {
        pointer.to_string()
    }
}

/// Number and join validation errors.
///
/// Each error is a list of context fragments, joined with single spaces
/// after its `ERRORn:` label. Errors are joined with [`ERROR_SEPARATOR`].
/// An empty input yields an empty string.
///
/// ```
/// use wirecheck_schema::format_errors;
///
/// let message = format_errors(vec![
///     vec!["/id".to_string(), "is not an integer".to_string()],
///     vec!["missing \"name\"".to_string()],
/// ]);
/// assert_eq!(message, "ERROR1: /id is not an integer  - ERROR2: missing \"name\"");
/// ```
pub fn format_errors<I, C, S>(errors: I) -> String
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut message = String::new();
    for (index, context) in errors.into_iter().enumerate() {
        if !message.is_empty() {
            message.push_str(ERROR_SEPARATOR);
        }
        message.push_str("ERROR");
        message.push_str(&(index + 1).to_string());
        message.push(':');
        for fragment in context {
            message.push(' ');
            message.push_str(fragment.as_ref());
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::ContentType;

    #[test]
    fn numbers_every_error() {
        let message = format_errors(vec![vec!["a"], vec!["b", "c"], vec!["d"]]);
        assert_eq!(message, "ERROR1: a  - ERROR2: b c  - ERROR3: d");
    }

    #[test]
    fn no_errors_is_empty() {
        let none: Vec<Vec<String>> = Vec::new();
        assert_eq!(format_errors(none), "");
    }

    #[test]
    fn collects_all_engine_errors() {
        let schema = Schema::new(
            "pair",
            ContentType::Json,
            &json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" }
                }
            }),
        )
        .unwrap();

        let err = validate_instance(&schema, &json!({"id": "x", "name": 3})).unwrap_err();
        match err {
            SchemaError::ValidationFailed { schema, message } => {
                assert_eq!(schema, "pair");
                assert!(message.starts_with("ERROR1: "));
                assert!(message.contains("  - ERROR2: "));
                assert!(!message.contains("ERROR3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn errors_name_the_failing_location() {
        let schema = Schema::new(
            "pair",
            ContentType::Json,
            &json!({
                "type": "object",
                "properties": {
                    "a": { "type": "string" },
                    "b": { "type": "string" }
                },
                "required": ["c"]
            }),
        )
        .unwrap();

        let err = validate_instance(&schema, &json!({"a": 1, "b": 1})).unwrap_err();
        let SchemaError::ValidationFailed { message, .. } = err else {
            panic!("expected a validation failure");
        };
        assert!(message.contains(": /a 1 is not of type \"string\""), "{message}");
        assert!(message.contains(": /b 1 is not of type \"string\""), "{message}");
        assert!(message.contains(": <root> \"c\" is a required property"), "{message}");
    }

    #[test]
    fn conforming_instance_passes() {
        let schema = Schema::new("any", ContentType::Json, &json!({})).unwrap();
        assert!(validate_instance(&schema, &json!([1, "two", null])).is_ok());
    }
}
