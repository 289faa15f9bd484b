use crate::dump::{self, DumpFormat, DumpOptions, RedactionLevel};
use crate::environment::ServerEnvironment;
use crate::fields::Field;
use crate::logging::{init_logging_with_config, LogConfig};
use crate::source;
use crate::value::RawValue;
use crate::view::EnvView;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Command-line interface for serverenv
///
/// Inspects the environment a CGI runtime hands to a script, either from the
/// current process or from a JSON/YAML fixture.
#[derive(Parser)]
#[command(name = "serverenv")]
#[command(about = "Inspect CGI server environment fields", long_about = None)]
pub struct Cli {
    /// Debug-level logging with source locations, ignoring SERVERENV_LOG_*
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Logging configuration for this invocation.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        if self.verbose {
            LogConfig::default_dev()
        } else {
            LogConfig::from_env()
        }
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the field catalogue (key, kind, accessor)
    Fields,
    /// Print every catalogue field with its typed value
    Dump {
        /// JSON or YAML fixture to read instead of the process environment
        #[arg(short, long, env = "SERVERENV_FIXTURE")]
        fixture: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,

        /// Which sensitive fields to mask
        #[arg(long, value_enum, default_value_t = RedactionLevel::Credentials)]
        redact: RedactionLevel,

        /// Skip fields whose key is not set
        #[arg(long, default_value_t = false)]
        present_only: bool,
    },
    /// Print a single key coerced to the requested type, as JSON
    Get {
        /// Environment key, e.g. REQUEST_METHOD
        key: String,

        /// JSON or YAML fixture to read instead of the process environment
        #[arg(short, long, env = "SERVERENV_FIXTURE")]
        fixture: Option<PathBuf>,

        /// Target type
        #[arg(long = "as", value_enum, default_value_t = CoerceAs::Raw)]
        coerce: CoerceAs,
    },
}

/// Target type for `serverenv get`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CoerceAs {
    /// Stored value without coercion
    Raw,
    Text,
    Int,
    Float,
    Bool,
    List,
}

/// Coerce `key` as requested; absence becomes `null`.
#[must_use]
pub fn coerce_key(view: &EnvView, key: &str, coerce: CoerceAs) -> RawValue {
    match coerce {
        CoerceAs::Raw => view.get_raw(key).cloned().unwrap_or(RawValue::Null),
        CoerceAs::Text => view.get_string(key).map_or(RawValue::Null, RawValue::String),
        CoerceAs::Int => view.get_int(key).map_or(RawValue::Null, RawValue::from),
        CoerceAs::Float => view.get_float(key).map_or(RawValue::Null, RawValue::from),
        CoerceAs::Bool => RawValue::Bool(view.get_bool(key)),
        CoerceAs::List => RawValue::Array(view.get_list(key)),
    }
}

fn load_view(fixture: Option<&Path>) -> Result<EnvView> {
    match fixture {
        Some(path) => source::load_fixture(path),
        None => {
            debug!("No fixture given, reading process environment");
            Ok(source::from_process_env())
        }
    }
}

fn write_fields<W: Write>(out: &mut W) -> Result<()> {
    let key_width = Field::ALL.iter().map(|f| f.key().len()).max().unwrap_or(0);
    for field in Field::ALL {
        writeln!(
            out,
            "{:<key_width$}  {:<7}  {}",
            field.key(),
            field.kind().as_str(),
            field.accessor()
        )?;
    }
    Ok(())
}

/// Execute a parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if a fixture cannot be loaded or output cannot be written.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Fields => write_fields(out)?,
        Commands::Dump {
            fixture,
            format,
            redact,
            present_only,
        } => {
            let env = ServerEnvironment::from_view(load_view(fixture.as_deref())?);
            let options = DumpOptions {
                format,
                redaction: redact,
                present_only,
            };
            out.write_all(dump::render(&env, &options)?.as_bytes())?;
        }
        Commands::Get {
            key,
            fixture,
            coerce,
        } => {
            let view = load_view(fixture.as_deref())?;
            let value = coerce_key(&view, &key, coerce);
            writeln!(out, "{}", serde_json::to_string(&value)?)?;
        }
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Parse process arguments, install logging and run the selected command
/// against stdout.
///
/// # Errors
///
/// Fails if logging cannot be installed; otherwise see [`run`].
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging_with_config(&cli.log_config())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
