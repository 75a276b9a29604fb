//! Workouts CLI
//!
//! Terminal client for the workout service:
//! - Register, log in and out
//! - List, add, edit, delete and complete workouts
//! - Print a starter config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use workout_tracker::config::{generate_default_config, Config};
use workout_tracker::session::{self, login_notice, register_notices};
use workout_tracker::workouts::{self, Feedback, Saved, WorkoutAction};
use workout_tracker::{
    ApiError, FileStore, HttpClient, LoginForm, RegisterForm, SessionContext, SessionStore,
    WorkoutBoard, WorkoutForm,
};

#[derive(Parser)]
#[command(name = "workouts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track and manage your daily workouts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workout service URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: platform config dir, then ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Mobile number (11 digits)
        #[arg(long)]
        mobile_no: String,
        #[arg(long)]
        password: String,
        /// Repeat the password (default: same as --password)
        #[arg(long)]
        verify_password: Option<String>,
    },

    /// Log in and remember the session
    Login {
        email: String,
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List your workouts
    List,

    /// Add a workout
    Add {
        name: String,
        /// e.g. "30 mins", "1 hour"
        duration: String,
    },

    /// Edit a workout; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        duration: Option<String>,
    },

    /// Delete a workout
    Delete {
        id: String,
    },

    /// Mark a workout as completed
    Complete {
        id: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match Config::load_with_env(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    workout_tracker::logging::init(&config.logging);

    if let Err(e) = run(cli, config).await {
        match e.downcast_ref::<ApiError>() {
            Some(err) if err.requires_login() => {
                eprintln!("Your session has expired or is missing.");
                eprintln!("Log in again with:");
                eprintln!("  workouts login <email> <password>");
            }
            Some(err) => {
                for message in err.messages() {
                    eprintln!("Error: {}", message);
                }
            }
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let api = HttpClient::connect(&config.api.base_url, config.api.timeout())?;
    let mut ctx = SessionContext::new(FileStore::new(&config.session.file));
    tracing::debug!(api = %config.api.base_url, session = ?config.session.file, "client ready");

    match cli.command {
        Commands::Register {
            first_name,
            last_name,
            email,
            mobile_no,
            password,
            verify_password,
        } => {
            let form = RegisterForm {
                first_name,
                last_name,
                email,
                mobile_no,
                verify_password: verify_password.unwrap_or_else(|| password.clone()),
                password,
            };
            let result = session::register(&api, &form).await;
            if result.is_ok() {
                println!("Successfully registered! Log in with `workouts login`.");
                return Ok(());
            }
            for notice in register_notices(&result) {
                eprintln!("{}", notice.message);
            }
            std::process::exit(1);
        }

        Commands::Login { email, password } => {
            let form = LoginForm::new(&email, password);
            let result = ctx.login(&api, &form).await.cloned();
            let notice = login_notice(&email, &result);
            if notice.is_error() {
                eprintln!("{}", notice.message);
                std::process::exit(1);
            }
            println!("{}", notice.message);
        }

        Commands::Logout => {
            ctx.unset()?;
            println!("Logged out.");
        }

        Commands::Whoami => {
            let session = ctx.restore(&api).await?;
            let Some(user) = &session.user else {
                println!("Not logged in.");
                return Ok(());
            };
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(user)?),
                Format::Table => {
                    println!("Name:  {}", user.display_name());
                    println!("Email: {}", user.email);
                    println!("ID:    {}", user.id);
                    if user.is_admin {
                        println!("Role:  admin");
                    }
                }
            }
        }

        Commands::List => {
            let token = require_token(&ctx)?;
            let mut board = WorkoutBoard::new();
            workouts::load(&api, &token, &mut board).await?;
            print_board(&board, cli.format)?;
        }

        Commands::Add { name, duration } => {
            let token = require_token(&ctx)?;
            let mut form = WorkoutForm::for_new();
            form.name = name;
            form.duration = duration;
            save(&api, &token, form, cli.format).await?;
        }

        Commands::Edit { id, name, duration } => {
            let token = require_token(&ctx)?;
            let mut board = WorkoutBoard::new();
            workouts::load(&api, &token, &mut board).await?;

            let current = board
                .get(&id)
                .with_context(|| format!("No workout with id {}", id))?;
            let mut form = WorkoutForm::for_existing(current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(duration) = duration {
                form.duration = duration;
            }
            save(&api, &token, form, cli.format).await?;
        }

        Commands::Delete { id } => {
            let token = require_token(&ctx)?;
            let mut board = WorkoutBoard::new();
            workouts::load(&api, &token, &mut board).await?;
            act(WorkoutAction::Delete, workouts::delete(&api, &token, &id, &mut board).await)?;
            print_board(&board, cli.format)?;
        }

        Commands::Complete { id } => {
            let token = require_token(&ctx)?;
            let mut board = WorkoutBoard::new();
            workouts::load(&api, &token, &mut board).await?;
            act(WorkoutAction::Complete, workouts::complete(&api, &token, &id, &mut board).await)?;
            print_board(&board, cli.format)?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Stored token, or the login hint when there is none
fn require_token<S: SessionStore>(ctx: &SessionContext<S>) -> anyhow::Result<String> {
    match ctx.store().load_token()? {
        Some(token) => Ok(token),
        None => Err(ApiError::Unauthorized.into()),
    }
}

async fn save(api: &HttpClient, token: &str, form: WorkoutForm, format: Format) -> anyhow::Result<()> {
    if !form.is_ready() {
        anyhow::bail!("Name and duration are required");
    }
    let mut board = WorkoutBoard::new();
    let action = WorkoutAction::for_form(&form);
    let saved = match workouts::save(api, token, &form, &mut board).await {
        Ok(saved) => saved,
        Err(e) => return act(action, Err(e)),
    };
    act(action, Ok(()))?;

    match saved {
        Saved::Refreshed => print_board(&board, format),
        Saved::Stale(e) if e.requires_login() => Err(e.into()),
        Saved::Stale(e) => {
            eprintln!("Could not refresh workouts: {}", e);
            Ok(())
        }
    }
}

/// Print the action's success message, or turn the failure into the
/// same wording the browser shows
fn act(action: WorkoutAction, result: Result<(), ApiError>) -> anyhow::Result<()> {
    match result {
        Ok(()) => {
            eprintln!("{}", action.success_message());
            Ok(())
        }
        Err(e) => match Feedback::failure(action, &e) {
            Feedback::RedirectToLogin => Err(e.into()),
            Feedback::Notify(notice) => Err(anyhow::anyhow!(notice.message)),
        },
    }
}

fn print_board(board: &WorkoutBoard, format: Format) -> anyhow::Result<()> {
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(board.workouts())?);
        return Ok(());
    }

    if board.is_empty() {
        println!("No workouts found. Add your first workout!");
        println!();
        println!("  workouts add \"Morning Run\" \"30 mins\"");
        return Ok(());
    }

    println!(
        "{:<26} {:<24} {:<16} {:<10} {}",
        "ID", "Name", "Duration", "Status", "Added"
    );
    println!("{}", "-".repeat(96));

    for workout in board.workouts() {
        println!(
            "{:<26} {:<24} {:<16} {:<10} {}",
            workout.id,
            workout.name,
            workout.duration,
            workout.status,
            workout.added_label()
        );
    }

    Ok(())
}
