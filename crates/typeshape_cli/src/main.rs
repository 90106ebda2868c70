//! typeshape: extract TypeScript-ready type descriptors from a code model

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use typeshape_extract::OutputFormat;

#[derive(Parser)]
#[command(
    name = "typeshape",
    version,
    about = "Type-graph extraction for TypeScript declarations",
    after_help = r#"Examples:
  typeshape extract project.json --format json
  typeshape extract project.json --unit Models/Order.cs
  typeshape generate project.json --config typeshape.toml

Set TYPESHAPE_LOG to control logging (e.g. TYPESHAPE_LOG=debug).
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the extracted descriptors of one unit or all units.
    Extract {
        /// Project code model (JSON).
        model: PathBuf,
        /// Only extract the unit with this path.
        #[arg(long)]
        unit: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value = "dts")]
        format: Format,
        /// Extraction options (TOML).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Base directory for relative source paths (defaults to the model's directory).
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Regenerate every existing sibling artifact.
    Generate {
        /// Project code model (JSON).
        model: PathBuf,
        /// Extraction options (TOML).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Base directory for relative source paths (defaults to the model's directory).
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Dts,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Dts => OutputFormat::Dts,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    // TYPESHAPE_LOG controls the filter, default "info"
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_env("TYPESHAPE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::Extract {
            model,
            unit,
            format,
            config,
            root,
        } => {
            let inputs = commands::Inputs::load(&model, config.as_deref(), root)?;
            commands::extract(&inputs, unit.as_deref(), format.into(), &mut stdout)
        }
        Command::Generate {
            model,
            config,
            root,
        } => {
            let inputs = commands::Inputs::load(&model, config.as_deref(), root)?;
            commands::generate(&inputs, &mut stdout).map(|_| ())
        }
    }
}
