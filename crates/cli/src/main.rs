mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storybook_core::{env_required, DATABASE_URL_ENV};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "storybook-admin")]
#[command(about = "Admin back end for illustrated-book projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the admin HTTP server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the PostgreSQL schema if it is missing
    Migrate,
    /// Print the page, character and image counts of one project
    Summary { project_id: String },
}

fn database_url() -> Result<String> {
    Ok(env_required(DATABASE_URL_ENV)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Summary { project_id } => commands::summary::run(&project_id).await?,
    }

    Ok(())
}
