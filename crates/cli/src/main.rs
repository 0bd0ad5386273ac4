//! ClaudiaCalc interactive calculator CLI.
//!
//! This binary wires the operator's terminal into the calculator. It performs:
//! 1. **Configuration:** Built-in defaults, optionally replaced by a JSON file and overridden by flags.
//! 2. **Logging:** A `tracing` subscriber on stderr carrying the command feedback.
//! 3. **Session:** The blocking command loop over stdin and stdout until `q` or end of input.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use claudia_calc_core::Calculator;
use claudia_calc_core::common::CalcError;
use claudia_calc_core::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "claudia-calc",
    author,
    version,
    about = "Four-register interactive calculator",
    long_about = "Four-register interactive calculator.\n\nEnter a-d to set a register, 1-4 to clear one, + - * / to compute A = A op B,\np to print the registers, m to show the menu and q to quit.\n\nExamples:\n  claudia-calc\n  claudia-calc --log-level info\n  echo 'a 5 b 2 + p q' | claudia-calc --no-menu"
)]
struct Cli {
    /// JSON configuration file (display and logging settings).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level for command feedback; overrides RUST_LOG and the configuration.
    #[arg(long)]
    log_level: Option<String>,

    /// Do not print the menu at startup.
    #[arg(long)]
    no_menu: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if cli.no_menu {
        config.display.show_menu_on_start = false;
    }

    if let Err(e) = init_logging(&config, cli.log_level.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let mut calc = Calculator::new(io::stdin().lock(), io::stdout().lock(), config);
    if let Err(e) = calc.run() {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber.
///
/// The level comes from `--log-level` if given, else `RUST_LOG`, else the
/// configuration. Timestamps and targets are omitted so each line reads as
/// `LEVEL message`.
fn init_logging(config: &Config, cli_level: Option<&str>) -> Result<(), CalcError> {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).map_err(|e| CalcError::Config(e.to_string()))?,
        None => EnvFilter::builder()
            .with_default_directive(config.general.level_filter()?.into())
            .from_env_lossy(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| CalcError::Config(e.to_string()))
}
