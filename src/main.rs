//! GLID - Gas Lift Installation Decision
//!
//! Screens a well for gas lift from categorical production, economic and
//! environmental assessments.
//!
//! # Usage
//!
//! ```bash
//! # One-off screening from flags
//! glid recommend --productivity-index High --bottomhole-pressure Low \
//!     --gas-liquid-ratio High --gas-availability Yes \
//!     --compression-cost Available --environmental-impact Positive
//!
//! # Screening from a JSON document (or '-' for stdin)
//! glid recommend --input well.json --format json
//!
//! # Print the input form
//! glid form
//!
//! # Serve the HTTP API
//! glid serve --addr 127.0.0.1:8080
//! ```
//!
//! # Exit Codes
//!
//! - `0`: a verdict was produced (Install, DoNotInstall or Inconclusive)
//! - `1`: configuration or I/O failure
//! - `2`: invalid input
//!
//! # Environment Variables
//!
//! - `GLID_CONFIG`: Path to a config file (default: `./glid.toml`)
//! - `GLID_CORS_ORIGINS`: Comma-separated origins allowed to call the API
//! - `RUST_LOG`: Logging level (default: warn, info for `serve`)

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use glid::api::{create_app, ApiState};
use glid::config::{self, validation, GlidConfig, OutputFormat};
use glid::types::{RawEconomic, RawEnvironmental, RawProduction};
use glid::{DecisionEngine, FormSchema, RawAssessment};

/// Exit code for input outside the declared label domains
const EXIT_INVALID_INPUT: u8 = 2;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "glid")]
#[command(about = "GLID - Gas Lift Installation Decision")]
#[command(version)]
struct CliArgs {
    /// Config file path (overrides GLID_CONFIG and ./glid.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Evaluate one well and print the recommendation
    Recommend(RecommendArgs),

    /// Print the input form (sections, fields, options, help)
    Form {
        /// Output format (default: from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Serve the HTTP API
    Serve {
        /// Override the bind address (default: server.addr from config)
        #[arg(short, long, value_name = "HOST:PORT")]
        addr: Option<String>,
    },

    /// Validate a config file and report unknown keys
    CheckConfig {
        /// Config file (default: GLID_CONFIG or ./glid.toml)
        path: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct RecommendArgs {
    /// Read the assessment as JSON from FILE ('-' for stdin)
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "productivity_index",
            "bottomhole_pressure",
            "gas_liquid_ratio",
            "gas_availability",
            "compression_cost",
            "environmental_impact",
        ]
    )]
    input: Option<PathBuf>,

    /// Productivity index: High | Low | Unknown
    #[arg(long, value_name = "LABEL")]
    productivity_index: Option<String>,

    /// Bottomhole pressure: High | Low | Unknown
    #[arg(long, value_name = "LABEL")]
    bottomhole_pressure: Option<String>,

    /// Gas-liquid ratio: High | Low | Unknown
    #[arg(long, value_name = "LABEL")]
    gas_liquid_ratio: Option<String>,

    /// Gas availability: Yes | No
    #[arg(long, value_name = "LABEL")]
    gas_availability: Option<String>,

    /// Compression cost: Available | NotAvailable
    #[arg(long, value_name = "LABEL")]
    compression_cost: Option<String>,

    /// Environmental impact: Positive | Negative
    #[arg(long, value_name = "LABEL")]
    environmental_impact: Option<String>,

    /// Output format (default: from config)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl RecommendArgs {
    /// Flags are passed through untouched; validation happens in the engine.
    fn to_raw(&self) -> RawAssessment {
        RawAssessment {
            production: RawProduction {
                productivity_index: self.productivity_index.clone(),
                bottomhole_pressure: self.bottomhole_pressure.clone(),
                gas_liquid_ratio: self.gas_liquid_ratio.clone(),
            },
            economic: RawEconomic {
                gas_availability: self.gas_availability.clone(),
                compression_cost: self.compression_cost.clone(),
            },
            environmental: RawEnvironmental {
                impact: self.environmental_impact.clone(),
            },
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read assessment from stdin")?;
    } else {
        text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read assessment from {}", path.display()))?;
    }
    Ok(text)
}

fn run_recommend(args: &RecommendArgs) -> Result<ExitCode> {
    let raw = match &args.input {
        Some(path) => match serde_json::from_str::<RawAssessment>(&read_input(path)?) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("error: invalid input: {e}");
                return Ok(ExitCode::from(EXIT_INVALID_INPUT));
            }
        },
        None => args.to_raw(),
    };

    let engine = DecisionEngine::new();
    let evaluation = match engine.evaluate_raw(&raw) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    match args.format.unwrap_or(config::get().output.format) {
        OutputFormat::Text => print!("{}", evaluation.render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&evaluation).context("Failed to encode evaluation")?
        ),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_form(format: Option<OutputFormat>) -> Result<ExitCode> {
    let form = FormSchema::gas_lift();
    match format.unwrap_or(config::get().output.format) {
        OutputFormat::Text => print!("{}", form.render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&form).context("Failed to encode form")?
        ),
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_server(addr: Option<String>) -> Result<ExitCode> {
    let cfg = config::get();
    let addr = addr.unwrap_or_else(|| cfg.server.addr.clone());
    let app = create_app(ApiState::new(cfg.well.name.clone()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(well = %cfg.well.name, "GLID HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received Ctrl+C, shutting down");
        })
        .await
        .context("HTTP server failed")?;

    info!("GLID shutdown complete");
    Ok(ExitCode::SUCCESS)
}

fn run_check_config(path: Option<PathBuf>) -> Result<ExitCode> {
    let path = path
        .or_else(|| std::env::var(config::CONFIG_ENV_VAR).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for w in validation::validate_unknown_keys(&contents) {
        println!("warning: {w}");
    }

    match GlidConfig::from_toml_str(&contents) {
        Ok(cfg) => {
            println!("{}: OK (well '{}', server {})", path.display(), cfg.well.name, cfg.server.addr);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}: {e}", path.display());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<()> {
    let cfg = GlidConfig::load(path).context("Failed to load configuration")?;
    config::init(cfg);
    Ok(())
}

fn init_tracing(json: bool, default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    let default_filter = match args.command {
        SubCommand::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(args.json_logs, default_filter);

    match args.command {
        SubCommand::CheckConfig { path } => run_check_config(path.or(args.config)),
        SubCommand::Recommend(recommend) => {
            load_config(args.config.as_deref())?;
            run_recommend(&recommend)
        }
        SubCommand::Form { format } => {
            load_config(args.config.as_deref())?;
            run_form(format)
        }
        SubCommand::Serve { addr } => {
            load_config(args.config.as_deref())?;
            run_server(addr).await
        }
    }
}
