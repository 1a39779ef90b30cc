use crate::demo::{run_demo, run_outbreak, run_risk, run_triage, DemoArgs, OutbreakArgs, RiskArgs, TriageArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use healthai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HealthAI",
    about = "Run the community health triage service or score cases from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a set of symptoms and print the urgency, conditions, and first aid
    Triage(TriageArgs),
    /// Estimate regional outbreak risk from environmental conditions
    Outbreak(OutbreakArgs),
    /// Score personal lifestyle risk for chronic conditions
    Risk(RiskArgs),
    /// Run every estimator against sample clinic cases
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Triage(args) => run_triage(args),
        Command::Outbreak(args) => run_outbreak(args),
        Command::Risk(args) => run_risk(args),
        Command::Demo(args) => run_demo(args),
    }
}
