use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heroforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate every image of the plan.
    Generate(GenerateArgs),
    /// Print the built-in plan as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory.
    #[arg(long, default_value = "assets/images")]
    out_dir: PathBuf,

    /// RNG seed shared by the whole batch.
    #[arg(long, default_value_t = heroforge::DEFAULT_SEED)]
    seed: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Webp)]
    format: FormatChoice,

    /// Encoder quality (1-100).
    #[arg(long, default_value_t = heroforge::DEFAULT_QUALITY)]
    quality: u8,

    /// Plan JSON to use instead of the built-in Bristol plan.
    #[arg(long)]
    plan: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Webp,
    Jpeg,
}

impl From<FormatChoice> for heroforge::OutputFormat {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Webp => heroforge::OutputFormat::Webp,
            FormatChoice::Jpeg => heroforge::OutputFormat::Jpeg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let plan = match &args.plan {
        Some(path) => heroforge::BatchPlan::from_json_path(path)
            .with_context(|| format!("load plan '{}'", path.display()))?,
        None => heroforge::BatchPlan::bristol(),
    };
    let settings = heroforge::BatchSettings {
        out_dir: args.out_dir,
        seed: args.seed,
        format: args.format.into(),
        quality: args.quality,
    };

    let mut sink = heroforge::FsSink::new();
    let report = heroforge::run_batch(&plan, &settings, &mut sink)
        .with_context(|| format!("generate images into '{}'", settings.out_dir.display()))?;

    println!("generated {} images:", report.images.len());
    for img in report.listing() {
        println!("  {}: {} bytes", img.file_name(), img.bytes);
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let json = heroforge::BatchPlan::bristol().to_json_pretty()?;
    match args.out {
        Some(path) => std::fs::write(&path, json + "\n")
            .with_context(|| format!("write plan '{}'", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
