use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tandem_core::account::NotificationUpdate;
use tandem_core::partner::PartnerFilter;
use tandem_core::profile::{ProfileUpdate, Proficiency};
use tandem_core::schedule::{DEFAULT_DURATION_MINUTES, ScheduleRequest};
use tandem_infrastructure::AppConfig;

mod app;
mod commands;
mod logging;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(about = "Tandem - find language partners, schedule sessions and chat", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep all state in memory for this run
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in with any email and password
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Show the signed-in user
    Whoami,
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Account settings: notification switches and password change
    #[command(alias = "settings")]
    Account {
        #[arg(long, value_enum)]
        notify_email: Option<Toggle>,
        /// Session reminders
        #[arg(long, value_enum)]
        notify_sessions: Option<Toggle>,
        /// New message notifications
        #[arg(long, value_enum)]
        notify_messages: Option<Toggle>,
        #[arg(long)]
        change_password: bool,
    },
    /// Browse the partner directory
    Partners {
        /// Filter by name
        #[arg(long, default_value = "")]
        search: String,
        /// Native language of the partner
        #[arg(long)]
        language: Option<String>,
        /// Language the partner is learning
        #[arg(long)]
        learning: Option<String>,
        #[arg(long)]
        availability: Option<String>,
    },
    /// List upcoming and past sessions
    Sessions,
    /// Schedule a session with a partner
    Schedule {
        #[arg(long)]
        partner: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
        /// HH:MM
        #[arg(long, default_value = "")]
        time: String,
        /// Minutes
        #[arg(long, default_value_t = DEFAULT_DURATION_MINUTES.to_string())]
        duration: String,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List conversations, or open or write to one
    Messages {
        /// Filter by participant name
        #[arg(long, default_value = "")]
        search: String,
        #[command(subcommand)]
        action: Option<MessageAction>,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    Show,
    /// Change profile fields; anything not given stays as it is
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        /// Native language
        #[arg(long)]
        native: Option<String>,
        #[arg(long)]
        availability: Option<String>,
        #[arg(long)]
        interests: Option<String>,
        /// LANGUAGE=LEVEL, e.g. Spanish=Advanced (repeatable)
        #[arg(long, value_parser = parse_learning)]
        learn: Vec<(String, Proficiency)>,
        /// Stop learning a language (repeatable)
        #[arg(long)]
        drop: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> bool {
        toggle == Toggle::On
    }
}

fn parse_learning(raw: &str) -> std::result::Result<(String, Proficiency), String> {
    let (language, level) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LANGUAGE=LEVEL, got '{}'", raw))?;
    Ok((language.trim().to_string(), level.parse()?))
}

#[derive(Subcommand, Debug)]
enum MessageAction {
    /// Print a conversation and mark it read
    Show { id: String },
    /// Send a message
    Send { id: String, text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_create(cli.config.clone()).context("Failed to load config")?;
    let _guard = logging::init(&config.logging.level, &config.log_directory()?)?;
    tracing::debug!(command = ?cli.command, "Starting");

    let app = App::new(config, cli.ephemeral)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(&app, cli.command, &mut out).await
}

async fn run(app: &App, command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Login { email, password } => {
            commands::account::login(app, &email, &password, out).await?
        }
        Commands::Whoami => commands::account::whoami(app, out)?,
        Commands::Profile { action } => match action {
            None | Some(ProfileAction::Show) => commands::profile::show(app, out)?,
            Some(ProfileAction::Edit {
                name,
                bio,
                native,
                availability,
                interests,
                learn,
                drop,
            }) => {
                let update = ProfileUpdate {
                    name,
                    bio,
                    native_language: native,
                    availability,
                    interests,
                    learn,
                    drop,
                };
                commands::profile::edit(app, update, out)?
            }
        },
        Commands::Account {
            notify_email,
            notify_sessions,
            notify_messages,
            change_password,
        } => {
            let update = NotificationUpdate {
                email: notify_email.map(bool::from),
                sessions: notify_sessions.map(bool::from),
                messages: notify_messages.map(bool::from),
            };
            commands::account::settings(app, update, change_password, out)?
        }
        Commands::Partners {
            search,
            language,
            learning,
            availability,
        } => {
            let filter = PartnerFilter {
                query: search,
                native_language: language,
                learning_language: learning,
                availability,
            };
            commands::partners::list(app, &filter, out)?
        }
        Commands::Sessions => commands::sessions::list(app, out)?,
        Commands::Schedule {
            partner,
            date,
            time,
            duration,
            topic,
            notes,
        } => {
            let request = ScheduleRequest {
                date,
                time,
                duration,
                topic,
                notes,
            };
            let today = chrono::Local::now().date_naive();
            commands::sessions::schedule(app, &partner, request, today, out).await?
        }
        Commands::Messages { search, action } => match action {
            None => commands::messages::list(app, &search, out)?,
            Some(MessageAction::Show { id }) => commands::messages::show(app, &id, out)?,
            Some(MessageAction::Send { id, text }) => {
                commands::messages::send(app, &id, &text, out)?
            }
        },
    }

    Ok(())
}
