use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use jp_users::api::{self, ApiClient};
use jp_users::config;
use jp_users::models::{FetchStyle, NewUser};
use jp_users::render;
use jp_users::services::UserSession;

fn build_client(env_file: Option<&str>) -> ApiClient {
    config::load_env_file(env_file);
    let base_url = config::get_api_base_url();
    match ApiClient::new(&base_url) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    }
}

fn print_list_error(message: &str) {
    eprintln!("{}{}", yansi::Paint::new("Error loading users: ").red().bold(), yansi::Paint::new(message).red());
}

fn print_form_error(message: &str) {
    eprintln!("{}{}", yansi::Paint::new("Error: ").red().bold(), yansi::Paint::new(message).red());
}

fn read_form(name: &str, email: &str, phone: &str) -> NewUser {
    match NewUser::new(name, email, phone) {
        Ok(user) => user,
        Err(e) => {
            print_form_error(&e.to_string());
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "jp-users",
    author,
    version,
    about = "List and create users against the JSONPlaceholder API",
    long_about = r#"jp-users fetches user records from a JSON REST API and submits new ones.

The API root defaults to https://jsonplaceholder.typicode.com and can be changed with API_BASE_URL (environment or --env-file).

Examples:
  1) List users with future combinators:
      jp-users users list --style chained
  2) Create a user:
      jp-users users create --name Ada --email ada@example.com --phone 555-0100
"#,
    after_help = "Use `jp-users <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List or create users
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
    /// Load with both styles, optionally create a user, then show the list
    #[command(about = "Walk through both list styles and a form submission", long_about = "Loads the user list once with chained futures and once with async/await, then submits the form if --name, --email and --phone are all given. The created user is shown at the top of the list.")]
    Demo {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Padding after each list fetch, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Print the effective configuration and try one list call
    CheckConfig,
}

#[derive(Subcommand)]
enum UserCommands {
    #[command(about = "List users", long_about = "Fetch the user list and render it as a table. The fetch is padded by --delay-ms (default LOAD_DELAY_MS or 1000).")]
    List {
        /// How the fetch is composed
        #[arg(long, value_enum, default_value_t = FetchStyle::AsyncAwait)]
        style: FetchStyle,
        /// Padding after the fetch, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    #[command(about = "Create a user", long_about = "Submit name, email and phone to the API and print the record it returns. All three fields are required.")]
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
}

async fn run_load(session: &mut UserSession, style: FetchStyle, delay_ms: u64) {
    println!("{} {}...", yansi::Paint::new("Loading users using").cyan(), yansi::Paint::new(style.label()).bold());
    if let Err(e) = session.load(style, delay_ms).await {
        print_list_error(&e.to_string());
        process::exit(1);
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    let client = build_client(cli.env_file.as_deref());

    match cli.command {
        Commands::Users { sub } => match sub {
            UserCommands::List { style, delay_ms } => {
                let mut session = UserSession::new(client);
                run_load(&mut session, style, delay_ms.unwrap_or_else(config::get_load_delay_ms)).await;
                println!("\n{}\n", render::render_users(session.users()));
            }
            UserCommands::Create { name, email, phone } => {
                let form = read_form(&name, &email, &phone);
                let mut session = UserSession::new(client);
                match session.submit(&form).await {
                    Ok(created) => {
                        println!("{}", yansi::Paint::new("User created successfully!").green());
                        println!("\n{}\n", render::user_detail_table(&created));
                    }
                    Err(e) => {
                        print_form_error(&e.to_string());
                        process::exit(1);
                    }
                }
            }
        },
        Commands::Demo { name, email, phone, delay_ms } => {
            let pad = delay_ms.unwrap_or_else(config::get_load_delay_ms);
            let mut session = UserSession::new(client);
            for style in [FetchStyle::Chained, FetchStyle::AsyncAwait] {
                run_load(&mut session, style, pad).await;
                println!("{} {} users", yansi::Paint::new("Loaded").green(), session.users().len());
            }

            if let (Some(name), Some(email), Some(phone)) = (name, email, phone) {
                let form = read_form(&name, &email, &phone);
                match session.submit(&form).await {
                    Ok(_) => println!("{}", yansi::Paint::new("User created successfully!").green()),
                    Err(e) => print_form_error(&e.to_string()),
                }
            }
            println!("\n{}\n", render::render_users(session.users()));
        }
        Commands::CheckConfig => {
            println!("{} {}", yansi::Paint::new("API base URL:").bold(), yansi::Paint::new(client.base_url()).cyan());
            match api::list_users(&client).await {
                Ok(users) => {
                    println!("{}", yansi::Paint::new(format!("Configuration looks valid ({} users returned)", users.len())).green());
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
