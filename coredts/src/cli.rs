//! Command-line pipeline.
//!
//! Reads the API document, generates the declaration file, and writes it out.
//! The document is rendered completely before anything is written, so a failed
//! run never leaves a partial output file behind.

use anyhow::Context;
use clap::Parser;
use coredts_codegen::{Generator, GeneratorOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "COREDTS_LOG";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "generated-definitions.d.ts";

const STDIN_PATH: &str = "-";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "coredts")]
#[command(author, version, about = "Generate TypeScript declarations from the Core Lua API", long_about = None)]
pub struct Args {
    /// API document (JSON). Use `-` to read from stdin.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Declaration file to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Emit deprecated entities and members with a `@deprecated` tag.
    #[arg(long)]
    pub keep_deprecated: bool,
}

impl Args {
    /// Returns the generator options selected by the arguments.
    #[must_use]
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions::new().omit_deprecated(!self.keep_deprecated)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of entities in the API document.
    pub entities: usize,
    /// Number of bytes written.
    pub bytes_written: usize,
    /// Path written to.
    pub output: PathBuf,
}

/// Installs the global tracing subscriber.
///
/// The filter is read from [`LOG_ENV_VAR`] and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the full pipeline.
///
/// # Errors
/// Returns an error if the input cannot be read or parsed, or if the output
/// cannot be written.
pub fn run(args: &Args) -> anyhow::Result<RunSummary> {
    let json = read_input(&args.input)?;
    let api = coredts_schema::parse_api(&json)
        .with_context(|| format!("failed to parse API document {}", args.input.display()))?;
    tracing::info!(
        "Loaded schema with {} classes, {} namespaces, {} enums",
        api.classes.len(),
        api.namespaces.len(),
        api.enums.len()
    );

    let declarations = Generator::new(&api)
        .with_options(args.generator_options())
        .generate();

    write_output(&args.output, &declarations)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!("Wrote {} bytes to {}", declarations.len(), args.output.display());

    Ok(RunSummary {
        entities: api.entity_count(),
        bytes_written: declarations.len(),
        output: args.output.clone(),
    })
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("failed to read API document from stdin")?;
        return Ok(json);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read API document {}", path.display()))
}

/// Writes through a temporary file in the target directory, then renames it
/// into place. The target is either fully replaced or left untouched.
fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
