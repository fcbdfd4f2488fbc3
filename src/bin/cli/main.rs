mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use client::HbnbClient;
use hbnb::config;
use output::{OutputConfig, OutputFormat};
use std::process;

/// Command line client for the HBNB places and reviews API
#[derive(Parser, Debug)]
#[clap(name = "hbnb-cli", about = "CLI for the HBNB places and reviews API")]
struct Cli {
    /// Server URL to connect to
    #[clap(long, env = "HBNB_URL", global = true)]
    server_url: Option<String>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Quiet mode: minimal output (just IDs)
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the server is up
    Status,
    /// Show how many objects of each kind are stored
    Stats,
    /// Manage places
    #[command(subcommand)]
    Place(commands::place::PlaceCommands),
    /// Manage reviews
    #[command(subcommand)]
    Review(commands::review::ReviewCommands),
}

/// Resolves the server URL from CLI args, config file, or defaults
///
/// Precedence: CLI flag / env var > config file > http://localhost:5000
fn resolve_server_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }

    let config_path = config::get_config_dir_path().map(|dir| dir.join(config::CONFIG_FILE_NAME));
    if let Ok(update) = config::config_from_file(config_path) {
        if let Some(url) = update.server_url {
            return url;
        }
    }

    "http://localhost:5000".to_string()
}

/// Formats an error for human-readable stderr output
fn format_error(err: &dyn std::error::Error) -> String {
    let err_string = err.to_string();

    if err_string.contains("error sending request")
        || err_string.contains("connection refused")
        || err_string.contains("Connection refused")
        || err_string.contains("tcp connect error")
    {
        return format!("Could not connect to server. Is hbnb running?\n  {}", err_string);
    }

    err_string
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = HbnbClient::new(resolve_server_url(cli.server_url));
    let output_config = OutputConfig {
        format: cli.format,
        quiet: cli.quiet,
    };

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Status => match client.status().await {
            Ok(status) => {
                println!("{}", status.get("status").and_then(|s| s.as_str()).unwrap_or("unknown"));
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        Commands::Stats => match client.stats().await {
            Ok(stats) => {
                output::print_stats(&stats, &output_config);
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        Commands::Place(cmd) => commands::place::execute(&client, cmd, &output_config).await,
        Commands::Review(cmd) => commands::review::execute(&client, cmd, &output_config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error(e.as_ref()));
        process::exit(1);
    }
}
