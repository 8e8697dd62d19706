use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use icon2h::convert::{convert, ConvertOptions};
use icon2h::source::Transparency;

#[derive(Parser)]
#[command(name = "icon2h")]
#[command(about = "Compile a PNG or SVG icon into a packed 2bpp C header")]
struct Cli {
    /// Output symbol name (must be a valid C identifier)
    symbol: String,

    /// Input image path (.png or .svg)
    input: PathBuf,

    /// Transparency color for PNG input: "black" or "white"
    #[arg(short, long)]
    transparency: Option<String>,

    /// Rasterization width for SVG input
    #[arg(long)]
    width: Option<u32>,

    /// Rasterization height for SVG input
    #[arg(long)]
    height: Option<u32>,

    /// Output header path (defaults to <SYMBOL>.h)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Template file overriding the embedded default
    #[arg(long)]
    template: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, short)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icon2h=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let transparency = cli
        .transparency
        .as_deref()
        .map(|s| s.parse::<Transparency>())
        .transpose()?;

    let opts = ConvertOptions {
        symbol: cli.symbol,
        input: cli.input,
        transparency,
        width: cli.width,
        height: cli.height,
        output: cli.output,
        template: cli.template,
        force: cli.force,
    };

    let output = opts.output_path();
    let artifact = convert(&opts)?;

    println!(
        "Wrote {} ({}x{}, {} bytes)",
        output.display(),
        artifact.width(),
        artifact.height(),
        artifact.bytes().len()
    );

    Ok(())
}
