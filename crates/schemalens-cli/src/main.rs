mod config;
mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use schemalens_core::{redact_url, validate_schema};
use schemalens_introspect::{IntrospectOptions, get_extractor};

use config::{DATABASE_URL_ENV, TargetInputs, load_config, resolve_target};
use error::CliResult;
use logging::init_logging;
use output::{write_json_atomic, write_json_stdout};

#[derive(Parser, Debug)]
#[command(name = "schemalens", version, about = "Relational schema introspection")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a schema snapshot and print it as JSON.
    Introspect(IntrospectArgs),
}

#[derive(Args, Debug)]
struct IntrospectArgs {
    /// Database connection URL (flag form).
    #[arg(long, value_name = "URL", conflicts_with = "conn_pos")]
    conn: Option<String>,
    /// Database connection URL (positional form).
    #[arg(value_name = "URL")]
    conn_pos: Option<String>,
    /// Only read this schema (namespace). System schemas are skipped otherwise.
    #[arg(long, value_name = "SCHEMA")]
    schema: Option<String>,
    /// Named connection profile from the config file.
    #[arg(long)]
    profile: Option<String>,
    /// Config file holding connection profiles.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Write the snapshot to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Leave views and materialized views out of the snapshot.
    #[arg(long, default_value_t = false)]
    no_views: bool,
    /// Skip index extraction.
    #[arg(long, default_value_t = false)]
    no_indexes: bool,
    /// Skip table and column comments.
    #[arg(long, default_value_t = false)]
    no_comments: bool,
    /// Write the snapshot without checking its internal consistency.
    #[arg(long, default_value_t = false)]
    no_validate: bool,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Introspect(args) => run_introspect(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run_introspect(args: IntrospectArgs) -> CliResult<()> {
    init_logging(args.log_json)?;

    let config = load_config(args.config.as_deref())?;
    let env_url = std::env::var(DATABASE_URL_ENV).ok();
    let target = resolve_target(
        &TargetInputs {
            url: args.conn.as_deref().or(args.conn_pos.as_deref()),
            schema: args.schema.as_deref(),
            profile: args.profile.as_deref(),
            env_url: env_url.as_deref(),
        },
        &config,
    )?;

    let options = IntrospectOptions {
        schema: target.schema.clone(),
        include_views: !args.no_views,
        include_indexes: !args.no_indexes,
        include_comments: !args.no_comments,
    };

    tracing::info!(
        event = "run_started",
        connection = %redact_url(&target.url),
        schema = target.schema.as_deref().unwrap_or("*"),
    );
    let timer = Instant::now();

    let extractor = get_extractor(&target.url)?;
    tracing::info!(event = "backend_selected", engine = extractor.engine());

    let schema = extractor.get_schema(&options).await?;
    tracing::info!(
        event = "extraction_finished",
        tables = schema.tables.len(),
        relations = schema.relations.len(),
    );

    if !args.no_validate {
        validate_schema(&schema)?;
    }

    match args.out.as_deref() {
        Some(path) => {
            write_json_atomic(path, &schema)?;
            tracing::info!(event = "schema_written", path = %path.display());
        }
        None => {
            write_json_stdout(&schema)?;
            tracing::info!(event = "schema_written", path = "-");
        }
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);

    Ok(())
}
