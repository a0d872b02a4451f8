//! coredts command-line entry point.
//!
//! ```bash
//! coredts --input CoreLuaAPI.json --output generated-definitions.d.ts
//! COREDTS_LOG=debug coredts -i CoreLuaAPI.json --keep-deprecated
//! ```

use clap::Parser;
use coredts::cli::{self, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_tracing();

    match cli::run(&args) {
        Ok(summary) => {
            tracing::info!(
                "Done! {} entities, {} bytes written to {}",
                summary.entities,
                summary.bytes_written,
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed with an error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
