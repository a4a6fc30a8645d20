use serde::Serialize;
use wirecheck_schema::SchemaError;

use crate::cmd::{load_registry, read_document, ValidateArgs};
use crate::exit::{schema_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{preview, print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct ValidationOutput<'a> {
    schema: &'a str,
    content_type: String,
    document: String,
    valid: bool,
    errors: Option<String>,
}

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = load_registry(&args.schemas, args.strict)?;
    let content_type = registry
        .schema_content_type(&args.schema)
        .map_err(|err| schema_error("validate failed", err))?;
    let data = read_document(&args.document)?;

    let (valid, errors) = match registry.validate(&data, &args.schema) {
        Ok(()) => (true, None),
        Err(SchemaError::ValidationFailed { message, .. }) => (false, Some(message)),
        Err(err) => return Err(schema_error("validate failed", err)),
    };

    let out = ValidationOutput {
        schema: &args.schema,
        content_type: content_type.to_string(),
        document: args.document.display().to_string(),
        valid,
        errors,
    };
    print_validation(&out, format);

    Ok(if valid { SUCCESS } else { DATA_INVALID })
}

fn print_validation(out: &ValidationOutput<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => print_table(
            &["SCHEMA", "CONTENT TYPE", "DOCUMENT", "VALID", "ERRORS"],
            vec![vec![
                out.schema.to_string(),
                out.content_type.clone(),
                out.document.clone(),
                out.valid.to_string(),
                out.errors
                    .as_deref()
                    .map(|errors| preview(errors, 120))
                    .unwrap_or_default(),
            ]],
        ),
        OutputFormat::Pretty => match &out.errors {
            None => println!("{}: valid against '{}'", out.document, out.schema),
            Some(errors) => {
                println!("{}: does not match '{}'", out.document, out.schema);
                for error in errors.split(wirecheck_schema::validator::ERROR_SEPARATOR) {
                    println!("  {error}");
                }
            }
        },
    }
}
