mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wirecheck", version, about = "JSON message schema validation CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_subcommand() {
        let cli = Cli::try_parse_from([
            "wirecheck",
            "validate",
            "/tmp/doc.json",
            "--schemas",
            "/tmp/schemas",
            "--schema",
            "envelope",
            "--strict",
        ])
        .expect("validate args should parse");

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.schema, "envelope");
                assert!(args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn validate_requires_schema_name() {
        let err = Cli::try_parse_from([
            "wirecheck",
            "validate",
            "/tmp/doc.json",
            "--schemas",
            "/tmp/schemas",
        ])
        .expect_err("missing --schema should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_get_path_keys() {
        let cli = Cli::try_parse_from(["wirecheck", "get", "doc.json", "foo", "bar"])
            .expect("get args should parse");
        match cli.command {
            Command::Get(args) => assert_eq!(args.keys, vec!["foo", "bar"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
