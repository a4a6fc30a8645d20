use clap::{Args, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use wirecheck_data::DataContainer;
use wirecheck_schema::{RegistryConfig, SchemaRegistry};

use crate::exit::{data_error, io_error, schema_error, CliResult};
use crate::output::OutputFormat;

pub mod get;
pub mod schemas;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON document against a named schema.
    Validate(ValidateArgs),
    /// Print the value and type stored at a key path.
    Get(GetArgs),
    /// List the schemas found in a schema directory.
    Schemas(SchemasArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Get(args) => get::run(args, format),
        Command::Schemas(args) => schemas::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON document to validate ("-" reads stdin).
    pub document: PathBuf,
    /// Directory of `<name>.schema.json` / `<name>.binary.schema.json` files.
    #[arg(long, value_name = "DIR", env = "WIRECHECK_SCHEMAS")]
    pub schemas: PathBuf,
    /// Name of the schema to validate against.
    #[arg(long, short = 's')]
    pub schema: String,
    /// Reject properties the schema does not declare.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// JSON document to read ("-" reads stdin).
    pub document: PathBuf,
    /// Object keys from the root down. No keys selects the whole document.
    pub keys: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Schema directory to load.
    #[arg(long, value_name = "DIR", env = "WIRECHECK_SCHEMAS")]
    pub schemas: PathBuf,
    /// Apply strict mode while compiling.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn load_registry(dir: &Path, strict: bool) -> CliResult<SchemaRegistry> {
    let config = RegistryConfig {
        strict_mode: strict,
        ..RegistryConfig::default()
    };
    let registry = SchemaRegistry::from_directory_with_config(dir, config)
        .map_err(|err| schema_error("schema load failed", err))?;
    tracing::debug!(dir = %dir.display(), count = registry.len(), "loaded schema directory");
    Ok(registry)
}

pub(crate) fn read_document(path: &Path) -> CliResult<DataContainer> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| io_error("failed reading stdin", err))?;
        text
    } else {
        std::fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?
    };

    DataContainer::parse(&text).map_err(|err| data_error("document is not valid JSON", err))
}
