// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Asciigraph CLI entrypoint.
//!
//! Reads one or more diagram files (default `graph.txt`, `-` for stdin), extracts each into a
//! graph and prints it as JSON, a Mermaid flowchart, or a short summary.
//!
//! Set `RUST_LOG` to control diagnostics on stderr (default `warn`).

use std::fmt::Write as _;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use asciigraph::diagnostics::TracingDiagnostics;
use asciigraph::format::{export_flowchart, export_json, graph_schema, FlowDirection};
use asciigraph::{extract_graph_with, ExtractError, Graph};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

const STDIN_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("stdin can only be read once")]
    StdinTwice,
    #[error("failed to extract {path}: {source}")]
    Extract { path: String, source: ExtractError },
    #[error(transparent)]
    Export(#[from] asciigraph::format::JsonExportError),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Mermaid,
    Summary,
}

#[derive(Parser, Debug)]
#[command(name = "asciigraph", about = "Extract directed graphs from ASCII-art diagrams")]
struct Cli {
    /// Diagram files to read; `-` reads stdin.
    #[arg(default_value = "graph.txt")]
    files: Vec<PathBuf>,

    #[arg(long, value_enum, env = "ASCIIGRAPH_FORMAT", default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print each source diagram before its graph.
    #[arg(long)]
    echo: bool,

    /// Mermaid flowchart direction (TD/TB/LR).
    #[arg(long, env = "ASCIIGRAPH_DIRECTION", default_value = "TD")]
    direction: FlowDirection,

    /// Print the JSON schema of the output document and exit.
    #[arg(long)]
    schema: bool,
}

#[derive(Debug, Clone, Copy)]
struct RenderOptions {
    format: OutputFormat,
    pretty: bool,
    direction: FlowDirection,
}

impl From<&Cli> for RenderOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            pretty: cli.pretty,
            direction: cli.direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Source {
    name: String,
    text: String,
}

fn read_sources(files: &[PathBuf]) -> Result<Vec<Source>, CliError> {
    let mut stdin_used = false;
    let mut sources = Vec::with_capacity(files.len());

    for path in files {
        let name = path.display().to_string();
        let text = if name == STDIN_PATH {
            if stdin_used {
                return Err(CliError::StdinTwice);
            }
            stdin_used = true;
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read { path: name.clone(), source })?;
            text
        } else {
            std::fs::read_to_string(path)
                .map_err(|source| CliError::Read { path: name.clone(), source })?
        };
        sources.push(Source { name, text });
    }

    Ok(sources)
}

fn extract_source(source: &Source) -> Result<Graph, CliError> {
    let _span = tracing::info_span!("extract", path = %source.name).entered();
    let graph = extract_graph_with(&source.text, &mut TracingDiagnostics).map_err(|err| {
        CliError::Extract {
            path: source.name.clone(),
            source: err,
        }
    })?;
    tracing::debug!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "extracted graph"
    );
    Ok(graph)
}

fn render_graph(graph: &Graph, options: RenderOptions) -> Result<String, CliError> {
    let rendered = match options.format {
        OutputFormat::Json => {
            let mut json = export_json(graph, options.pretty)?;
            json.push('\n');
            json
        }
        OutputFormat::Mermaid => export_flowchart(graph, options.direction),
        OutputFormat::Summary => render_summary(graph),
    };
    Ok(rendered)
}

fn render_summary(graph: &Graph) -> String {
    let mut out = String::new();
    let start = graph.start_node().map_or("none", |node| node.label());
    let _ = writeln!(
        out,
        "{} nodes, {} edges, start {start}",
        graph.nodes().len(),
        graph.edges().len()
    );
    for (source, target) in graph.edge_labels() {
        let _ = writeln!(out, "  {source} -> {target}");
    }
    out
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();

    if cli.schema {
        let schema = serde_json::to_string_pretty(&graph_schema())
            .map_err(asciigraph::format::JsonExportError::from)?;
        writeln!(stdout, "{schema}")?;
        return Ok(());
    }

    let options = RenderOptions::from(&cli);
    let sources = read_sources(&cli.files)?;

    // Each source gets its own grid and node arena, so files extract independently.
    let rendered = sources
        .par_iter()
        .map(|source| extract_source(source).and_then(|graph| render_graph(&graph, options)))
        .collect::<Vec<_>>();

    let multiple = sources.len() > 1;
    for (source, output) in sources.iter().zip(rendered) {
        let output = output?;
        if multiple {
            writeln!(stdout, "== {}", source.name)?;
        }
        if cli.echo {
            writeln!(stdout, "{}", source.text.trim_end_matches('\n'))?;
        }
        stdout.write_all(output.as_bytes())?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("asciigraph: {err}");
        std::process::exit(1);
    }
}
