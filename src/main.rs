use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod diagnostics;
mod error;
mod inventory;
mod render;
mod source;

use error::InventoryError;
use render::OutputStyle;
use source::FormatArg;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "node-inventory")]
#[command(about = "Validate a cluster node inventory and emit normalized JSON", long_about = None)]
struct Cli {
    /// Inventory document (YAML or JSON).
    inventory_file: PathBuf,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Input format; `auto` picks from the file extension.
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Write the JSON to this file instead of stdout.
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure; help and version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    diagnostics::init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(rejected) = err.downcast_ref::<InventoryError>() {
                tracing::debug!(kind = rejected.kind(), "inventory rejected");
            }
            eprintln!("{}", diagnostics::error_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // 1) Decode the document.
    let document = source::load_document(&cli.inventory_file, cli.format)?;

    // 2) Validate + normalize.
    let nodes = inventory::validate_inventory(&document)?;

    // 3) Render.
    let json = render::render_nodes_json(&nodes, OutputStyle::from_pretty_flag(cli.pretty))?;

    match &cli.out {
        Some(out) => {
            std::fs::write(out, format!("{json}\n"))
                .with_context(|| format!("write output file {}", out.display()))?;
            tracing::info!(path = %out.display(), nodes = nodes.len(), "wrote normalized inventory");
            println!("Wrote {}", out.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
