//! offsetgen - IL2CPP function pointer header generator
//!
//! Usage:
//!   offsetgen                                  Read ./script.json, write headers to .
//!   offsetgen --path <script.json>             Read a specific script
//!   offsetgen --output <dir>                   Write headers to another directory
//!   offsetgen --config <config.json>           Override namespaces, file names, radix...

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use offsetgen_core::{Error, GeneratorConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "offsetgen")]
#[command(
    about = "Generate C++ function pointer and offset headers from an Il2CppDumper script.json",
    long_about = None
)]
struct Cli {
    /// Path to Il2CppDumper script.json file [default: ./script.json]
    #[arg(long)]
    path: Option<PathBuf>,

    /// Directory to write the header files to [default: current directory]
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file overriding the generator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = match verbose {
        0 => "offsetgen=warn",
        1 => "offsetgen=info",
        _ => "offsetgen=debug",
    };

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit through clap's usage error path
fn usage_error(err: Error, hint: &str) -> ! {
    Cli::command()
        .error(ErrorKind::ValueValidation, format!("{}. {}", err, hint))
        .exit()
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    if !path.is_file() {
        usage_error(
            Error::config(format!("config file not found: {}", path.display())),
            "Use --config to specify a path to the file.",
        );
    }

    let config = GeneratorConfig::load(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    debug!("Loaded config {:?}", config);
    Ok(config)
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let script_path = cli.path.unwrap_or_else(|| cwd.join("script.json"));
    let output_dir = cli.output.unwrap_or(cwd);

    if !script_path.exists() {
        usage_error(
            Error::InputNotFound(script_path),
            "Use --path to specify a path to the script.json file.",
        );
    }
    if !output_dir.is_dir() {
        usage_error(
            Error::OutputDirectoryInvalid(output_dir),
            "Use --output to specify a path to the directory.",
        );
    }

    let config = load_config(cli.config.as_deref())?;

    info!("Generating headers from {:?} into {:?}", script_path, output_dir);
    offsetgen_il2cpp::generate_headers(&script_path, &output_dir, &config)
        .with_context(|| format!("Failed to generate headers from {}", script_path.display()))?;

    println!("Took {}s to complete.", start.elapsed().as_secs_f64());
    Ok(())
}
