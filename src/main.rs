use anyhow::{Context, Result};
use clap::Parser;
use qrscan::{Config, FailurePolicy, ScanError, Scanner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "qrscan")]
#[command(about = "Find, print and outline the QR codes in an image")]
#[command(version)]
struct Cli {
    #[arg(default_value = "my_qr_code.png", help = "Path to image file")]
    path: PathBuf,

    #[arg(short, long, help = "Path to a JSON config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Do not open a window with the annotated image")]
    no_display: bool,

    #[arg(long, help = "Print the decoded codes as JSON")]
    json: bool,

    #[arg(long, help = "Skip payloads that are not valid UTF-8 instead of failing")]
    lenient: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ScanError>() {
                Some(ScanError::NoDetections) => println!("No QR code found in the image."),
                _ => error!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.no_display {
        config.display = false;
    }
    if cli.lenient {
        config.policy = FailurePolicy::Lenient;
    }
    debug!("Effective configuration: {:?}", config);

    let mut scanner = Scanner::new(config);
    if cli.json {
        scanner = scanner.quiet();
    }

    let codes = scanner
        .scan_codes(&cli.path)
        .with_context(|| format!("Failed to scan {}", cli.path.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&codes).context("Failed to serialize results")?;
        println!("{json}");
    }

    Ok(())
}
