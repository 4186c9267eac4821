use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use review_tracker::commands::{add, delete, edit, list, open, show, stages, ProjectFields};
use clap_complete::Shell;
use review_tracker::completions::generate_completions;
use review_tracker::config::TrackerConfig;
use review_tracker::validation::clap_ppm_number_validator;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "review-tracker")]
#[command(about = "Track security review projects through the approval workflow", long_about = None)]
#[command(version)]
struct Cli {
    /// Project data file (default: projects.json in the current directory)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Config file (default: review-tracker.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects, optionally filtered by PPM number, title, or contact
    List {
        /// Case-insensitive search text
        query: Option<String>,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show all details of a project
    Show {
        /// PPM number
        id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new project
    Add {
        /// PPM number
        #[arg(value_parser = clap_ppm_number_validator)]
        id: String,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Edit a project (only the given fields change)
    Edit {
        /// PPM number of the project to edit
        id: String,

        /// New PPM number
        #[arg(long = "id", value_parser = clap_ppm_number_validator)]
        new_id: Option<String>,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Delete a project
    Delete {
        /// PPM number
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the workflow stages and their progress percentages
    Stages,

    /// Open a project link in the browser
    Open {
        /// PPM number
        id: String,

        /// Which link: spia, ppm, onenote
        kind: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Initialize tracing on stderr so stdout stays clean for tables and JSON.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "review_tracker=debug"
    } else {
        "review_tracker=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate_completions(&mut cmd, *shell);
        return Ok(());
    }

    let config = TrackerConfig::resolve(cli.config.as_deref())?.with_data_file(cli.data_file);

    match cli.command {
        Commands::List { query, json } => list::execute(&config, query, json),
        Commands::Show { id, json } => show::execute(&config, id, json),
        Commands::Add { id, fields } => add::execute(&config, id, fields),
        Commands::Edit { id, new_id, fields } => edit::execute(&config, id, new_id, fields),
        Commands::Delete { id, yes } => delete::execute(&config, id, yes),
        Commands::Stages => stages::execute(),
        Commands::Open { id, kind } => open::execute(&config, id, kind),
        Commands::Completions { .. } => Ok(()),
    }
}
