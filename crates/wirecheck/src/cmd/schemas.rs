use serde::Serialize;

use crate::cmd::{load_registry, SchemasArgs};
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct SchemaEntry {
    name: String,
    content_type: String,
}

#[derive(Serialize)]
struct SchemasOutput {
    directory: String,
    strict: bool,
    schemas: Vec<SchemaEntry>,
}

pub fn run(args: SchemasArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = load_registry(&args.schemas, args.strict)?;

    let mut schemas = Vec::new();
    for name in registry.schema_names() {
        let content_type = registry
            .schema_content_type(&name)
            .map_err(|err| schema_error("schema lookup failed", err))?;
        schemas.push(SchemaEntry {
            name,
            content_type: content_type.to_string(),
        });
    }

    let out = SchemasOutput {
        directory: args.schemas.display().to_string(),
        strict: args.strict,
        schemas,
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["NAME", "CONTENT TYPE"],
            out.schemas
                .iter()
                .map(|entry| vec![entry.name.clone(), entry.content_type.clone()])
                .collect(),
        ),
        OutputFormat::Pretty => {
            println!("{} schema(s) in {}", out.schemas.len(), out.directory);
            for entry in &out.schemas {
                println!("  {} ({})", entry.name, entry.content_type);
            }
        }
    }

    Ok(SUCCESS)
}
