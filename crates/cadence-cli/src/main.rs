use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cadence", version, about = "Cadence automations CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage automations on the server
    Automation {
        #[command(subcommand)]
        action: commands::automation::AutomationAction,
    },
    /// Suggested starter automations
    Suggest {
        #[command(subcommand)]
        action: commands::suggest::SuggestAction,
    },
    /// Share automations and import shared links
    Share {
        #[command(subcommand)]
        action: commands::share::ShareAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Automation { action } => commands::automation::run(action).await,
        Commands::Suggest { action } => commands::suggest::run(action).await,
        Commands::Share { action } => commands::share::run(action).await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cadence", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
