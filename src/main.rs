use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use strategy_payments::application::context::PaymentContext;
use strategy_payments::config::LatencyProfile;
use strategy_payments::domain::amount::Amount;
use strategy_payments::domain::ports::ProcessingDelayBox;
use strategy_payments::infrastructure::delay::{InstantDelay, TokioDelay};
use strategy_payments::interfaces::driver::{run_batch, run_demo};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "info", "strategy_payments=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through every payment method and the common failure scenarios
    Demo {
        /// Purchase amount used throughout the demo
        #[arg(long, default_value = "299.99")]
        amount: Amount,

        #[command(flatten)]
        simulation: SimulationArgs,
    },
    /// Process payment requests from a CSV file and print one outcome per row
    Batch {
        /// Input payment requests CSV file
        input: PathBuf,

        #[command(flatten)]
        simulation: SimulationArgs,
    },
}

#[derive(Args)]
struct SimulationArgs {
    /// Skip the simulated processing latency
    #[arg(long)]
    instant: bool,

    /// JSON file overriding the per-method latency in milliseconds
    #[arg(long, conflicts_with = "instant")]
    latency_profile: Option<PathBuf>,
}

impl SimulationArgs {
    fn delay(&self, cancel: CancellationToken) -> Result<ProcessingDelayBox> {
        if self.instant {
            return Ok(Box::new(InstantDelay));
        }
        let profile = match &self.latency_profile {
            Some(path) => LatencyProfile::from_json_file(path).into_diagnostic()?,
            None => LatencyProfile::default(),
        };
        Ok(Box::new(TokioDelay::with_cancellation(profile, cancel)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so batch output on stdout stays machine-readable.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Ctrl+C cancels any payment still waiting on its simulated latency.
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, cancelling pending payments");
            signal_token.cancel();
        }
    });

    match cli.command {
        Command::Demo { amount, simulation } => {
            let delay = simulation.delay(cancel)?;
            let stdout = io::stdout();
            run_demo(&mut stdout.lock(), amount, delay)
                .await
                .into_diagnostic()?;
        }
        Command::Batch { input, simulation } => {
            let delay = simulation.delay(cancel.clone())?;
            let mut context = PaymentContext::new(delay);

            let file = File::open(input).into_diagnostic()?;
            let stdout = io::stdout();
            let summary = run_batch(file, stdout.lock(), &mut context, &cancel)
                .await
                .into_diagnostic()?;

            if summary.interrupted {
                eprintln!("Batch interrupted; remaining requests were not processed.");
            }
        }
    }

    Ok(())
}
