use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use forgeops::{forge::ForgeClient, preflight::Platform, preflight::Preflight};
use std::path::PathBuf;
use tracing_subscriber;

#[derive(Parser)]
#[command(name = "forgeops")]
#[command(about = "Manage forge repositories and back up databases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Manage forge repositories
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Subcommand)]
enum RepoCommands {
    /// Create a repository and push a local folder as the first commit
    Create {
        /// Repository name
        repo_name: String,

        /// Folder to push
        folder_path: PathBuf,
    },

    /// Tag the latest commit of a branch
    Tag {
        /// Tag name
        tag_name: String,

        /// Branch whose latest commit gets tagged
        branch_name: String,

        /// Repository working copy
        folder_path: PathBuf,
    },
}

#[derive(Subcommand)]
enum DbCommands {
    /// Back up a PostgreSQL database, locally or over SSH
    Backup {
        /// Connection string: <user>:<password>@<host>:<port>/<dbname>
        db_config: String,

        /// Directory the backup artifact is written to
        local_save_path: PathBuf,

        /// Remote SSH endpoint: <user>@<host>:<remote-db-port>
        #[arg(long)]
        remote: Option<String>,

        /// Local forwarding port for the SSH tunnel
        #[arg(long, default_value = "5433")]
        tunnel_port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level.as_tracing_level())
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let preflight = Preflight::new(Platform::detect());
    let forge = ForgeClient::new();

    match command {
        Commands::Repo { command } => match command {
            RepoCommands::Create {
                repo_name,
                folder_path,
            } => {
                forgeops::cli::create::execute(&repo_name, &folder_path, &preflight, &forge)?;
            }
            RepoCommands::Tag {
                tag_name,
                branch_name,
                folder_path,
            } => {
                forgeops::cli::tag::execute(
                    &tag_name,
                    &branch_name,
                    &folder_path,
                    &preflight,
                    &forge,
                )?;
            }
        },
        Commands::Db { command } => match command {
            DbCommands::Backup {
                db_config,
                local_save_path,
                remote,
                tunnel_port,
            } => {
                forgeops::cli::backup::execute(
                    &db_config,
                    &local_save_path,
                    remote.as_deref(),
                    tunnel_port,
                    &preflight,
                )?;
            }
        },
    }

    Ok(())
}
