//! Lost & Found CLI
//!
//! Each subcommand is one screen of the client. Screens that need a signed-in
//! user, or the administrator role, are gated before any request is made.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use mockable::{Clock, DefaultClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lostfound_client::api::ApiClient;
use lostfound_client::client_from_config;
use lostfound_client::config::Config;
use lostfound_client::forms::{
    FoundItemForm, LoginForm, LostItemForm, NewUserForm, RetrievalForm, SignupForm,
};
use lostfound_client::models::{Category, SearchFilters};
use lostfound_client::views::routes::{self, Navigation, Route};
use lostfound_client::views::{
    self, AdminTab, Banner, ClaimDecision, MyItemsTab, ReportCollection, Screen,
};

#[derive(Parser)]
#[command(name = "lostfound")]
#[command(about = "Campus Lost & Found client")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Repeat the password
        #[arg(short, long)]
        confirm_password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user and available screens
    Whoami,

    /// List item categories
    Categories,

    /// Lost items
    #[command(subcommand)]
    Lost(LostCommand),

    /// Found items
    #[command(subcommand)]
    Found(FoundCommand),

    /// Claims on matched items
    #[command(subcommand)]
    Claim(ClaimCommand),

    /// Your lost items and retrieval history
    MyItems {
        /// Show retrieval history instead of lost items
        #[arg(long)]
        history: bool,

        /// Expand potential matches for this lost item
        #[arg(long)]
        matches: Option<String>,
    },

    /// Administrator screens
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Args)]
struct ItemFields {
    #[arg(short, long)]
    title: String,
    #[arg(short, long)]
    description: String,
    /// One of the categories listed by `lostfound categories`
    #[arg(short, long)]
    category: String,
    #[arg(short, long)]
    location: String,
    /// Serial number or other identifying code
    #[arg(short, long)]
    serial_number: Option<String>,
}

#[derive(Args)]
struct SearchArgs {
    /// Keywords
    query: String,
    #[arg(short, long)]
    category: Option<String>,
    #[arg(short, long)]
    location: Option<String>,
}

#[derive(Subcommand)]
enum LostCommand {
    /// Report a lost item
    Report {
        #[command(flatten)]
        item: ItemFields,
        /// Date lost (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date_lost: Option<String>,
    },
    /// List your lost items
    List {
        /// Expand potential matches for this lost item
        #[arg(long)]
        matches: Option<String>,
    },
    /// Search lost items
    Search(SearchArgs),
    /// Potential matches for a lost item
    Matches {
        id: String,
        #[arg(long, default_value = "your item")]
        title: String,
    },
}

#[derive(Subcommand)]
enum FoundCommand {
    /// Report a found item
    Report {
        #[command(flatten)]
        item: ItemFields,
    },
    /// Search found items
    Search(SearchArgs),
}

#[derive(Subcommand)]
enum ClaimCommand {
    /// Claim a found item for one of your lost items
    Create { lost_item_id: String, found_item_id: String },
    /// Ask for a claim to be verified
    Verify { claim_id: String },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Claims awaiting review
    Claims,
    /// Recorded retrievals
    Retrievals,
    /// Approve a pending claim
    Approve { claim_id: String },
    /// Reject a pending claim
    Reject { claim_id: String },
    /// Record the handoff of an approved claim
    RecordRetrieval {
        claim_id: String,
        #[arg(short, long)]
        notes: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Manage users
    #[command(subcommand)]
    Users(UserCommand),
    /// Manage lost item reports
    #[command(subcommand)]
    LostItems(ReportCommand),
    /// Manage found item reports
    #[command(subcommand)]
    FoundItems(ReportCommand),
}

#[derive(Subcommand)]
enum UserCommand {
    List,
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// student or admin
        #[arg(short, long, default_value = "student")]
        role: String,
    },
    Delete { user_id: String },
}

#[derive(Subcommand)]
enum ReportCommand {
    List,
    Create {
        #[command(flatten)]
        item: ItemFields,
        /// Date lost (YYYY-MM-DD); lost reports only
        #[arg(long)]
        date_lost: Option<String>,
    },
    Delete { item_id: String },
}

impl Commands {
    /// Route a command belongs to, for gating. `None` is always allowed.
    fn route(&self) -> Option<Route> {
        match self {
            Commands::Login { .. } | Commands::Signup { .. } => Some(Route::Login),
            Commands::Logout | Commands::Whoami | Commands::Categories => None,
            Commands::Lost(LostCommand::Search(_)) | Commands::Found(FoundCommand::Search(_)) => {
                Some(Route::Search)
            }
            Commands::Lost(_) | Commands::Claim(_) => Some(Route::Lost),
            Commands::Found(_) => Some(Route::Found),
            Commands::MyItems { .. } => Some(Route::MyItems),
            Commands::Admin(_) => Some(Route::Admin),
        }
    }
}

impl ItemFields {
    fn lost_form(&self, date_lost: Option<String>) -> LostItemForm {
        LostItemForm {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            date_lost,
            serial_number: self.serial_number.clone(),
        }
    }

    fn found_form(&self) -> FoundItemForm {
        FoundItemForm {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            serial_number: self.serial_number.clone(),
        }
    }
}

impl SearchArgs {
    fn filters(&self) -> Result<SearchFilters, Screen> {
        let category = match self.category.as_deref() {
            None => None,
            Some(raw) => match Category::parse(raw) {
                Some(category) => Some(category),
                None => {
                    return Err(Screen::new("Search")
                        .with_banner(Banner::Error(format!("Unknown category '{}'", raw))))
                }
            },
        };
        Ok(SearchFilters {
            category,
            location: self.location.clone(),
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config, cli.verbose);
    tracing::debug!("API base URL: {}", config.api_url);
    tracing::debug!("Storage path: {:?}", config.storage_path);

    let client = match client_from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let screen = run(&client, cli.command).await;
    print!("{}", screen);

    if screen.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(client: &ApiClient, command: Commands) -> Screen {
    if let Some(route) = command.route() {
        match routes::resolve(route, client.session()) {
            Navigation::Render(_) => {}
            Navigation::Redirect(Route::Login) => {
                return Screen::new("Sign In").with_banner(Banner::Error(
                    "Not signed in. Run `lostfound login` first.".to_string(),
                ))
            }
            Navigation::Redirect(_) if route == Route::Login => {
                return views::whoami(client.session()).with_banner(Banner::Info(
                    "Already signed in. Run `lostfound logout` to switch accounts.".to_string(),
                ))
            }
            Navigation::Redirect(_) => {
                return Screen::new(route.label()).with_banner(Banner::Error(
                    "Admin access required.".to_string(),
                ))
            }
        }
    }

    let today = DefaultClock.local().date_naive();

    match command {
        Commands::Login { email, password } => {
            views::login(client, &LoginForm { email, password }).await
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = SignupForm {
                name,
                email,
                password,
                confirm_password,
            };
            views::signup(client, &form).await
        }
        Commands::Logout => views::logout(client),
        Commands::Whoami => views::whoami(client.session()),
        Commands::Categories => {
            let mut screen = Screen::new("Categories");
            screen.extend(Category::ALL.iter().map(|c| format!("- {}", c.as_str())));
            screen
        }
        Commands::Lost(cmd) => match cmd {
            LostCommand::Report { item, date_lost } => {
                views::report_lost(client, &item.lost_form(date_lost), today).await
            }
            LostCommand::List { matches } => views::lost_items(client, matches.as_deref()).await,
            LostCommand::Search(args) => match args.filters() {
                Ok(filters) => views::search_lost(client, &args.query, &filters).await,
                Err(screen) => screen,
            },
            LostCommand::Matches { id, title } => views::item_matches(client, &id, &title).await,
        },
        Commands::Found(cmd) => match cmd {
            FoundCommand::Report { item } => views::report_found(client, &item.found_form()).await,
            FoundCommand::Search(args) => match args.filters() {
                Ok(filters) => views::search_found(client, &args.query, &filters).await,
                Err(screen) => screen,
            },
        },
        Commands::Claim(cmd) => match cmd {
            ClaimCommand::Create {
                lost_item_id,
                found_item_id,
            } => views::file_claim(client, &lost_item_id, &found_item_id).await,
            ClaimCommand::Verify { claim_id } => views::verify_claim(client, &claim_id).await,
        },
        Commands::MyItems { history, matches } => {
            let tab = if history {
                MyItemsTab::RetrievalHistory
            } else {
                MyItemsTab::LostItems
            };
            views::my_items(client, tab, matches.as_deref()).await
        }
        Commands::Admin(cmd) => run_admin(client, cmd, today).await,
    }
}

async fn run_admin(client: &ApiClient, command: AdminCommand, today: chrono::NaiveDate) -> Screen {
    match command {
        AdminCommand::Claims => views::admin_dashboard(client, AdminTab::Claims).await,
        AdminCommand::Retrievals => views::admin_dashboard(client, AdminTab::Retrievals).await,
        AdminCommand::Approve { claim_id } => {
            views::decide_claim(client, &claim_id, ClaimDecision::Approve).await
        }
        AdminCommand::Reject { claim_id } => {
            views::decide_claim(client, &claim_id, ClaimDecision::Reject).await
        }
        AdminCommand::RecordRetrieval {
            claim_id,
            notes,
            location,
        } => {
            let form = RetrievalForm {
                claim_id,
                notes,
                location,
            };
            views::record_retrieval(client, &form).await
        }
        AdminCommand::Users(cmd) => match cmd {
            UserCommand::List => views::manage_users(client).await,
            UserCommand::Create {
                name,
                email,
                password,
                role,
            } => {
                let form = NewUserForm {
                    name,
                    email,
                    password,
                    role,
                };
                views::create_user(client, &form).await
            }
            UserCommand::Delete { user_id } => views::delete_user(client, &user_id).await,
        },
        AdminCommand::LostItems(cmd) => match cmd {
            ReportCommand::List => views::manage_reports(client, ReportCollection::Lost).await,
            ReportCommand::Create { item, date_lost } => {
                views::create_lost_report(client, &item.lost_form(date_lost), today).await
            }
            ReportCommand::Delete { item_id } => {
                views::delete_report(client, ReportCollection::Lost, &item_id).await
            }
        },
        AdminCommand::FoundItems(cmd) => match cmd {
            ReportCommand::List => views::manage_reports(client, ReportCollection::Found).await,
            ReportCommand::Create { item, .. } => {
                views::create_found_report(client, &item.found_form()).await
            }
            ReportCommand::Delete { item_id } => {
                views::delete_report(client, ReportCollection::Found, &item_id).await
            }
        },
    }
}
