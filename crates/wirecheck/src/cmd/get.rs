use serde::Serialize;
use serde_json::Value;
use wirecheck_data::DataContainer;

use crate::cmd::{read_document, GetArgs};
use crate::exit::{data_error, CliResult, SUCCESS};
use crate::output::{preview, print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct GetOutput<'a> {
    path: &'a [String],
    #[serde(rename = "type")]
    data_type: String,
    value: Value,
    keys: Vec<String>,
}

pub fn run(args: GetArgs, format: OutputFormat) -> CliResult<i32> {
    let data = read_document(&args.document)?;
    let data_type = data
        .type_of(&args.keys)
        .map_err(|err| data_error("lookup failed", err))?;

    let out = GetOutput {
        path: &args.keys,
        data_type: data_type.to_string(),
        value: data.get::<Value>(&args.keys),
        keys: data.get::<DataContainer>(&args.keys).keys(),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["PATH", "TYPE", "VALUE"],
            vec![vec![
                display_path(out.path),
                out.data_type.clone(),
                preview(&out.value.to_string(), 120),
            ]],
        ),
        OutputFormat::Pretty => {
            println!(
                "{} ({}) = {}",
                display_path(out.path),
                out.data_type,
                DataContainer::from(out.value.clone()).to_pretty_string()
            );
        }
    }

    Ok(SUCCESS)
}

fn display_path(keys: &[String]) -> String {
    if keys.is_empty() {
        "<root>".to_string()
    } else {
        keys.join(".")
    }
}
