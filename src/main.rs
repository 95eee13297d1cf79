//! orgchart-layout CLI entry point.
//!
//! Reads an org-chart JSON payload from a file or stdin and writes the
//! computed layout as JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use orgchart_layout::{LayoutConfig, compute_layout_payload};

/// Org-chart payload to positioned nodes and routed edges.
#[derive(Parser, Debug)]
#[command(
    name = "orgchart-layout",
    version = env!("ORGCHART_LAYOUT_VERSION"),
    about = "Org-chart JSON payload to positioned nodes and routed edges"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// JSON file with layout settings (camelCase keys, missing keys use defaults)
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Default box width
    #[arg(long = "node-width")]
    node_width: Option<f64>,

    /// Default box height
    #[arg(long = "node-height")]
    node_height: Option<f64>,

    /// Vertical gap between ranks
    #[arg(long = "rank-sep")]
    rank_separation: Option<f64>,

    /// Horizontal gap between boxes
    #[arg(long = "node-sep")]
    node_separation: Option<f64>,

    /// Add a midpoint control point to single-rank edges
    #[arg(long = "curved")]
    curved: bool,

    /// Move employees without relationships out of the chart
    #[arg(long = "detach-unassigned")]
    detach_unassigned: bool,

    /// Group employees by department before layout
    #[arg(long = "group-by-department")]
    group_by_department: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,
}

impl Cli {
    fn layout_config(&self) -> Result<LayoutConfig, String> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read '{}': {}", path, e))?;
                serde_json::from_str(&text)
                    .map_err(|e| format!("invalid config '{}': {}", path, e))?
            }
            None => LayoutConfig::default(),
        };
        if let Some(v) = self.node_width {
            config.node_width = v;
        }
        if let Some(v) = self.node_height {
            config.node_height = v;
        }
        if let Some(v) = self.rank_separation {
            config.rank_separation = v;
        }
        if let Some(v) = self.node_separation {
            config.node_separation = v;
        }
        config.curved_edges |= self.curved;
        config.detach_unassigned |= self.detach_unassigned;
        config.group_by_department |= self.group_by_department;
        Ok(config)
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)))
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let config = cli.layout_config().unwrap_or_else(|e| fail(e));
    let result = compute_layout_payload(&text, &config).unwrap_or_else(|e| fail(e));

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .unwrap_or_else(|e| fail(e));

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
