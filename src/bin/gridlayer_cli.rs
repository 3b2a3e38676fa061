//! CLI tool for gridlayer - resolves a grid props file and outputs JSON
//!
//! Usage:
//!   gridlayer_cli <props.json>                  # Config + engine props to stdout
//!   gridlayer_cli <props.json> --cells          # ... plus every cell descriptor
//!   gridlayer_cli <props.json> -o out.json      # Output JSON to file
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`).

#![allow(clippy::exit)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridlayer::config::EffectiveConfig;
use gridlayer::content::CellDescriptor;
use gridlayer::render::EngineProps;
use gridlayer::{DataGrid, GridProps};

#[derive(Parser, Debug)]
#[command(name = "gridlayer_cli", about = "Resolve grid props into engine-ready JSON")]
struct Args {
    /// Grid props JSON file (the object the component receives)
    input: PathBuf,
    /// Include the descriptor of every cell, row by row
    #[arg(long)]
    cells: bool,
    /// Write to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a EffectiveConfig,
    engine: EngineProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    cells: Option<Vec<Vec<CellDescriptor>>>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let json = fs::read_to_string(&args.input)
        .unwrap_or_else(|e| fail(&format!("Error reading {}: {e}", args.input.display())));

    let props = GridProps::from_json(&json)
        .unwrap_or_else(|e| fail(&format!("Error parsing props: {e}")));

    let grid = DataGrid::new(props);
    info!(
        rows = grid.store().row_count(),
        columns = grid.store().columns().len(),
        "props resolved"
    );

    let cells = args.cells.then(|| {
        (0..grid.store().row_count())
            .map(|row| {
                (0..grid.store().columns().len())
                    .map(|col| grid.cell_content(col, row))
                    .collect()
            })
            .collect()
    });

    let report = Report {
        config: grid.config(),
        engine: grid.engine_props(),
        cells,
    };

    let json = serde_json::to_string_pretty(&report)
        .unwrap_or_else(|e| fail(&format!("Error serializing JSON: {e}")));

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                fail(&format!("Error writing {}: {e}", path.display()));
            }
            eprintln!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout();
            if stdout
                .write_all(json.as_bytes())
                .and_then(|()| writeln!(stdout))
                .is_err()
            {
                fail("Error writing to stdout");
            }
        }
    }
}
