use std::time::Instant;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::context::CliContext;
use crate::terminal::Terminal;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Region used to derive service endpoints (default `bj`).
    #[arg(long, global = true)]
    pub region: Option<String>,
    /// Explicit endpoint override, e.g. for a private deployment.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with a BCE access key pair.
    Login(commands::login::LoginArgs),
    /// Inspect AIHC resource pools.
    #[command(subcommand)]
    Pool(commands::pool::PoolCommand),
    /// Inspect and stop AIHC jobs.
    #[command(subcommand)]
    Job(commands::job::JobCommand),
    /// Generate, advance and inspect AIAK job chains.
    #[command(subcommand)]
    Chain(commands::chain::ChainCommand),
}

pub fn cli_main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let time_begin = Instant::now();
    let args = CliArgs::parse();

    let terminal = Terminal::new();
    let context = match CliContext::new(terminal, args.region, args.endpoint) {
        Ok(context) => context,
        Err(e) => {
            Terminal::new().print_error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = handle_command(args.command, context) {
        Terminal::new().print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    log::info!("finished in {:.2?}", time_begin.elapsed());
}

fn handle_command(command: Commands, mut context: CliContext) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => commands::login::handle_command(args, &mut context),
        Commands::Pool(command) => commands::pool::handle_command(command, &mut context),
        Commands::Job(command) => commands::job::handle_command(command, &mut context),
        Commands::Chain(command) => commands::chain::handle_command(command, &mut context),
    }
}
