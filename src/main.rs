use anyhow::Result;
use clap::{Parser, Subcommand};
use gitploy::commands::{Command, CommandContext, InitCommand, RunCommand, validators};
use gitploy::config::{Settings, SettingsBuilder};
use gitploy::constants;

#[derive(Parser)]
#[command(name = "gitploy")]
#[command(about = "Clone a repository, commit a timestamped file and push it back")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone the remote, commit the message file and push (default)
    Run {
        /// Configuration file path (defaults to gitploy.yaml when present)
        #[arg(short, long)]
        config: Option<String>,

        /// Remote repository URL, overrides the config file
        #[arg(long)]
        url: Option<String>,

        /// Commit message (default: prefix plus current timestamp)
        #[arg(short, long)]
        message: Option<String>,

        /// Leave the temporary working copy on disk
        #[arg(long)]
        keep_workspace: bool,

        /// Print a JSON report of the run
        #[arg(long)]
        json: bool,
    },

    /// Write a starter configuration file
    Init {
        /// Output file name
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        output: String,

        /// Overwrite existing file if it exists
        #[arg(long)]
        overwrite: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            config: None,
            url: None,
            message: None,
            keep_workspace: false,
            json: false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    execute_command(cli.command.unwrap_or_default())
}

fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            url,
            message,
            keep_workspace,
            json,
        } => {
            validators::validate_config_path(&config)?;
            validators::validate_remote_url(&url)?;
            validators::validate_commit_message(&message)?;

            let mut builder = SettingsBuilder::from_settings(Settings::resolve(config.as_deref())?);
            if let Some(url) = url {
                builder = builder.with_remote_url(url);
            }
            if keep_workspace {
                builder = builder.keep_workspace(true);
            }

            let context = CommandContext {
                settings: builder.build(),
            };
            RunCommand { message, json }.execute(&context)?;
        }
        Commands::Init { output, overwrite } => {
            // Init writes the defaults, so no config is loaded
            let context = CommandContext {
                settings: Settings::default(),
            };
            InitCommand { output, overwrite }.execute(&context)?;
        }
    }

    Ok(())
}
