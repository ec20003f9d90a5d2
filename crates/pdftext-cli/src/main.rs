use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use pdftext_core::config_file::{self, ConfigFile};
use pdftext_core::{ExtractConfig, Orchestrator};
use tracing_subscriber::EnvFilter;

mod backends;
mod output;

use output::ColorMode;

/// Extract plain text from a PDF, falling back across lopdf, pdf-extract and MuPDF
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Don't echo the extracted text (count and output path are still printed)
    #[arg(short, long)]
    quiet: bool,

    /// Comma-separated list of backends to skip (lopdf, pdf-extract, MuPDF)
    #[arg(long, value_delimiter = ',')]
    disable: Vec<String>,

    /// Read settings from this TOML file instead of the default locations
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config_file::load_from_path(path).unwrap_or_default()
        }
        None => config_file::load_config(),
    };
    init_logging(&file_config);

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let disabled = if cli.disable.is_empty() {
        file_config.disabled_backends()
    } else {
        cli.disable.clone()
    };
    let use_color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && file_config.color().unwrap_or(true);
    let quiet = cli.quiet || file_config.quiet().unwrap_or(false);

    let orchestrator = Orchestrator::new(
        ExtractConfig::default(),
        backends::build_backends(&disabled),
    );
    tracing::debug!(
        input = %orchestrator.config().input_path.display(),
        backends = ?orchestrator.backend_names(),
        "starting extraction"
    );

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    extract(&orchestrator, &mut writer, ColorMode(use_color), quiet)?;
    Ok(())
}

/// Run the fallback chain and report it. Extraction failures are reported,
/// not returned; only console write errors propagate.
fn extract(
    orchestrator: &Orchestrator,
    w: &mut dyn Write,
    color: ColorMode,
    quiet: bool,
) -> std::io::Result<()> {
    output::print_header(w)?;

    let mut write_err = None;
    let outcome = orchestrator.run(&mut |event| {
        if write_err.is_none()
            && let Err(e) = output::print_progress(w, &event, color)
        {
            write_err = Some(e);
        }
    });
    if let Some(e) = write_err {
        return Err(e);
    }

    output::print_outcome(w, &outcome, color, quiet)?;
    w.flush()
}

fn init_logging(config: &ConfigFile) {
    let filter = EnvFilter::try_from_env("PDFTEXT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(config.log_level().unwrap_or("error")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
