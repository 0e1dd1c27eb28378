//! Terminal front end
//!
//! Every command names the screen it stands for and passes the same
//! navigation guard the browser uses before any request is made.

mod commands;
mod output;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use electra::api::{ApiClient, ReqwestTransport};
use electra::config::Config;
use electra::router::{resolve, Access, Navigation, Route};
use electra::session::{FileStore, Role, Session, SessionContext};

pub use output::OutputFormat;

#[derive(Parser)]
#[command(name = "electra")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Electra election management API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/electra/config.toml, /etc/electra/config.toml, ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the config file
    #[arg(long, global = true, env = "ELECTRA_API_URL")]
    pub api_url: Option<String>,

    /// Output format for listings
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and save the session
    Login {
        #[arg(long, value_parser = parse_role, default_value = "voter")]
        role: Role,
        #[arg(short, long)]
        email: String,
        /// Password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the saved session
    Logout,

    /// Create an account
    Signup {
        /// Register an admin account instead of a voter account
        #[arg(long)]
        admin: bool,
        /// Voter ID (voter accounts)
        #[arg(long, required_unless_present = "admin")]
        voter_id: Option<String>,
        /// Display name (admin accounts)
        #[arg(long, required_if_eq("admin", "true"))]
        name: Option<String>,
        #[arg(short, long)]
        email: String,
        /// Password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the saved session
    Whoami,

    /// Resolve a path the way the browser router would
    Open {
        /// Path such as /dashboard or /admin-voters-list
        path: String,
    },

    /// Show the dashboard for the signed-in role
    Dashboard,

    /// Voter lists and registration
    Voters {
        #[command(subcommand)]
        action: VoterAction,
    },

    /// Apply as a candidate
    Apply {
        #[arg(long)]
        position: String,
        #[arg(long)]
        statement: String,
        #[arg(long)]
        identity_proof: Option<PathBuf>,
        #[arg(long)]
        membership_proof: Option<PathBuf>,
        #[arg(long)]
        supporting_document: Option<PathBuf>,
        #[arg(long)]
        photo: Option<PathBuf>,
        #[arg(long, default_value = "")]
        symbol: String,
        #[arg(long, default_value = "")]
        experience: String,
        /// Accept the candidate declaration
        #[arg(long)]
        accept_declaration: bool,
    },

    /// Show your candidacy status
    Application,

    /// Review candidate applications (admin)
    Applications {
        #[command(subcommand)]
        action: ApplicationAction,
    },

    /// Election phase and nomination deadline (admin)
    Election {
        #[command(subcommand)]
        action: ElectionAction,
    },

    /// Your notifications
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },

    /// Send a notification to all voters (admin)
    Notify {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
    },

    /// Report a mistake in your voter record
    Report {
        /// Field that is wrong, e.g. "Address"
        #[arg(long)]
        field: String,
        #[arg(long)]
        description: String,
    },

    /// List voter reports (admin)
    Reports,

    /// Show election results
    Results,

    /// Print or write a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum VoterAction {
    /// List voters; admins see contact columns
    List {
        /// Voter ID search (digits only, first four used)
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Register a voter (admin)
    Add {
        #[arg(long)]
        voter_id: String,
        #[arg(long)]
        full_name: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        branch: String,
    },
    /// Edit a voter (admin)
    Edit {
        voter_id: String,
        /// field=value, e.g. phone_no=9847012345 (repeatable)
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
}

#[derive(Subcommand)]
pub enum ApplicationAction {
    /// List applications
    List {
        /// Pending, Approved or Rejected
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        position: Option<String>,
    },
    /// Approve or reject an application
    Review {
        id: String,
        /// Approved or Rejected
        #[arg(long, default_value = "Approved")]
        decision: String,
        #[arg(long, default_value = "")]
        remarks: String,
    },
}

#[derive(Subcommand)]
pub enum ElectionAction {
    /// Show the election config
    Show,
    /// Update the election config
    Set {
        /// closed, nomination, voting or results
        #[arg(long)]
        phase: String,
        /// Nomination deadline, YYYY-MM-DD (empty string clears it)
        #[arg(long)]
        deadline: Option<String>,
        /// Notes shown to voters (empty string clears them)
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remind voters of the nomination deadline
    Remind,
}

#[derive(Subcommand)]
pub enum NotificationAction {
    /// List notifications you have not dismissed
    List,
    /// Hide a notification
    Dismiss { id: String },
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse().map_err(|e: electra::session::UnknownRole| e.to_string())
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected field=value, got {:?}", s))
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_with_env(path)?,
            None => Config::load_default(),
        };
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        Ok(config)
    }
}

/// Everything a command needs: config, saved session, output format
pub struct Shell {
    pub config: Config,
    pub store: FileStore,
    pub session: Session,
    pub context: Option<SessionContext>,
    pub format: OutputFormat,
}

impl Shell {
    pub fn open(config: Config, format: OutputFormat) -> Result<Self> {
        let dir = config.storage.data_path();
        let store = FileStore::in_dir(&dir)
            .with_context(|| format!("Failed to open session store in {}", dir.display()))?;
        let context = SessionContext::load(&store);
        let session = context
            .as_ref()
            .map(SessionContext::session)
            .unwrap_or_default();

        Ok(Self {
            config,
            store,
            session,
            context,
            format,
        })
    }

    /// Client carrying the saved token, if any
    pub fn api(&self) -> Result<ApiClient<ReqwestTransport>> {
        let transport = ReqwestTransport::new(self.config.api.timeout())?;
        let client = ApiClient::new(transport, &self.config.api.base_url);
        Ok(match &self.context {
            Some(ctx) => client.with_token(ctx.token.clone()),
            None => client,
        })
    }

    /// Pass the navigation guard for a screen, or explain why not
    pub fn enter(&self, route: Route) -> Result<()> {
        match resolve(&self.session, route.path()) {
            Navigation::Render(r) if r == route => Ok(()),
            Navigation::Render(r) | Navigation::Redirect(r) => {
                tracing::debug!(requested = %route, redirected = %r, "Command blocked by guard");
                match route.access() {
                    Access::SignedIn(Some(role)) => bail!(
                        "{} requires signing in as {}. Run `electra login --role {}`.",
                        route.title(),
                        role,
                        role
                    ),
                    _ => bail!("{} requires signing in. Run `electra login`.", route.title()),
                }
            }
        }
    }

    /// Session context of a guarded command
    pub fn context(&self) -> Result<&SessionContext> {
        self.context
            .as_ref()
            .context("Not signed in. Run `electra login`.")
    }
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let mut shell = Shell::open(config, cli.format)?;
    commands::dispatch(&mut shell, cli.command).await
}
