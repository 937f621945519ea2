use clap::{Parser, Subcommand};
use rambda_func::init_from_env;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rambda")]
#[command(about = "Rambda - invoke the echo function locally", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Invoke {
        #[arg(short, long)]
        payload: Option<String>,

        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_from_env()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Invoke {
            payload,
            file,
            pretty,
        } => {
            commands::invoke::execute(payload, file, pretty).await?;
        }
        Commands::Version => {
            println!("rambda {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
