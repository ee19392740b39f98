use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use taskdesk::cli;
use taskdesk_shared::{error_body, log_error};

/// taskdesk - Users and tasks with validated input
#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(about = "Validate, sanitize and store users and tasks", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage users
    #[command(subcommand)]
    User(UserCommands),
    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommands),
    /// Password policy and hashing
    #[command(subcommand)]
    Password(PasswordCommands),
    /// Escape markup characters in every string of a JSON document
    Sanitize {
        /// JSON file to sanitize
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Run the server-side user rules against a JSON payload
    Validate {
        file: PathBuf,
        /// Read the file as raw form input and run the form rules first
        #[arg(long)]
        form: bool,
    },
    /// Register a user
    Create {
        file: PathBuf,
        #[arg(long)]
        form: bool,
        #[arg(long)]
        password: String,
    },
    /// Check credentials
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// List registered users
    List,
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Run the server-side task rules against a JSON payload
    Validate {
        file: PathBuf,
        /// Read the file as raw form input owned by this user
        #[arg(long)]
        user_id: Option<i64>,
    },
    /// Create a task
    Create {
        file: PathBuf,
        #[arg(long)]
        user_id: Option<i64>,
    },
    /// Flip the completed flag of a task
    Toggle { id: u64 },
    /// List tasks
    List,
}

#[derive(Subcommand)]
enum PasswordCommands {
    /// Check a password against the strength policy
    Check { password: String },
    /// Hash a password with the configured work factor
    Hash { password: String },
    /// Compare a password with a stored hash
    Verify { password: String, hash: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = taskdesk::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    taskdesk::observability::init_observability(
        "taskdesk",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::User(command) => match command {
            UserCommands::Validate { file, form } => cli::user::validate(config, &file, form),
            UserCommands::Create {
                file,
                form,
                password,
            } => cli::user::create(config, &file, form, password).await,
            UserCommands::Login { email, password } => {
                cli::user::login(config, email, password).await
            }
            UserCommands::List => cli::user::list(config),
        },
        Commands::Task(command) => match command {
            TaskCommands::Validate { file, user_id } => cli::task::validate(&file, user_id),
            TaskCommands::Create { file, user_id } => cli::task::create(config, &file, user_id),
            TaskCommands::Toggle { id } => cli::task::toggle(config, id),
            TaskCommands::List => cli::task::list(config),
        },
        Commands::Password(command) => match command {
            PasswordCommands::Check { password } => cli::password::check(&password),
            PasswordCommands::Hash { password } => cli::password::hash(config, &password).await,
            PasswordCommands::Verify { password, hash } => {
                cli::password::verify(&password, &hash).await
            }
        },
        Commands::Sanitize { file } => cli::sanitize::run(&file),
    };

    if let Err(err) = &result {
        log_error(err, Some("taskdesk"));

        println!("{}", serde_json::to_string_pretty(&error_body(err))?);
    }

    result
}
