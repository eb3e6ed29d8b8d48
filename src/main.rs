use anyhow::Result;
use clap::{Parser, Subcommand};

/// folio - personal portfolio site with a password-protected admin area
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site and admin", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; a missing session secret is fatal here, before the
    // server ever binds
    let config = folio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_tracing(&config.logging.level, &config.logging.format)?;

    match cli.command {
        Commands::Serve { host, port } => folio::server::serve(config, host, port).await,
    }
}
