//! Corpdir CLI - company profile management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Store the logged-in user for this machine
//! corpdir login -n "Ada Lovelace"
//!
//! # Create a company from a JSON field file, attaching a logo
//! corpdir create -i acme.json -l acme-logo.png
//!
//! # Update an existing company
//! corpdir update c-42 -i acme.json
//!
//! # List locally cached companies / fetch one from the registry
//! corpdir companies
//! corpdir show c-42
//!
//! # Inspect or discard the saved draft
//! corpdir draft show
//! corpdir draft discard
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `whoami` - the stored session
//! - `companies` / `show` - the cached list and single records
//! - `create` / `update` - drive the profile wizard and submit
//! - `draft` - the durable create-mode draft

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "corpdir")]
#[command(author, version, about = "Corpdir CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the logged-in user for this machine
    Login {
        /// Full name to store in the session
        #[arg(short, long)]
        name: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List locally cached companies
    Companies,
    /// Fetch one company from the registry
    Show {
        /// Company id
        id: String,
    },
    /// Create a company from a JSON field file
    Create {
        /// JSON file holding the full profile, using wire field names
        #[arg(short, long)]
        input: PathBuf,

        /// Logo image to upload before submitting
        #[arg(short, long)]
        logo: Option<PathBuf>,
    },
    /// Update an existing company from a JSON field file
    Update {
        /// Company id
        id: String,

        /// JSON file holding the full profile, using wire field names
        #[arg(short, long)]
        input: PathBuf,

        /// Logo image to upload before submitting
        #[arg(short, long)]
        logo: Option<PathBuf>,
    },
    /// Inspect or discard the saved draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    /// Print the saved draft as JSON
    Show,
    /// Remove the saved draft
    Discard,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { name } => commands::session::login(&name)?,
        Commands::Logout => commands::session::logout()?,
        Commands::Whoami => commands::session::whoami()?,
        Commands::Companies => commands::companies::list()?,
        Commands::Show { id } => commands::companies::show(&id).await?,
        Commands::Create { input, logo } => {
            commands::profile::create(&input, logo.as_deref()).await?;
        }
        Commands::Update { id, input, logo } => {
            commands::profile::update(&id, &input, logo.as_deref()).await?;
        }
        Commands::Draft { action } => match action {
            DraftAction::Show => commands::draft::show()?,
            DraftAction::Discard => commands::draft::discard()?,
        },
    }
    Ok(())
}
