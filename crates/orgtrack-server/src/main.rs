#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use orgtrack_server::{build_router, AppConfig, AppState, PageSizes};
use orgtrack_store::open_registry;
use orgtrack_store::seed::{seed_registry, SeedPlan};
use std::env;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "orgtrack-server",
    about = "Student-organization membership registry"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Populate the registry with development fixtures.
    Seed {
        /// RNG seed; random when omitted.
        #[arg(long)]
        rng_seed: Option<u64>,
        #[arg(long, default_value_t = 5)]
        colleges: usize,
        #[arg(long, default_value_t = 12)]
        programs: usize,
        #[arg(long, default_value_t = 10)]
        organizations: usize,
        #[arg(long, default_value_t = 50)]
        students: usize,
        #[arg(long, default_value_t = 10)]
        members: usize,
    },
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn build_config() -> AppConfig {
    let defaults = AppConfig::default();
    let sizes = PageSizes::default();
    AppConfig {
        bind_addr: env_string("ORGTRACK_BIND_ADDR", &defaults.bind_addr),
        db_path: PathBuf::from(env_string(
            "ORGTRACK_DB_PATH",
            &defaults.db_path.to_string_lossy(),
        )),
        login_url: env_string("ORGTRACK_LOGIN_URL", &defaults.login_url),
        session_cookie: env_string("ORGTRACK_SESSION_COOKIE", &defaults.session_cookie),
        page_sizes: PageSizes {
            organization: env_u64("ORGTRACK_PAGE_SIZE_ORGANIZATION", sizes.organization),
            student: env_u64("ORGTRACK_PAGE_SIZE_STUDENT", sizes.student),
            college: env_u64("ORGTRACK_PAGE_SIZE_COLLEGE", sizes.college),
            program: env_u64("ORGTRACK_PAGE_SIZE_PROGRAM", sizes.program),
            org_member: env_u64("ORGTRACK_PAGE_SIZE_ORGMEMBER", sizes.org_member),
        },
    }
}

async fn serve(config: AppConfig) -> Result<(), String> {
    let conn = open_registry(&config.db_path).map_err(|e| e.to_string())?;
    let addr = config.bind_addr.clone();
    let state = AppState::new(conn, config);
    let router = build_router(state);
    let listener = TcpListener::bind(&addr).await.map_err(|e| e.to_string())?;
    info!(%addr, "listening");
    axum::serve(listener, router).await.map_err(|e| e.to_string())
}

fn run_seed(config: &AppConfig, plan: &SeedPlan, rng_seed: Option<u64>) -> Result<(), String> {
    let conn = open_registry(&config.db_path).map_err(|e| e.to_string())?;
    let rng_seed = rng_seed.unwrap_or_else(|| fastrand::u64(..));
    let summary =
        seed_registry(&conn, plan, rng_seed, chrono::Utc::now()).map_err(|e| e.to_string())?;
    info!(
        rng_seed,
        colleges = summary.colleges,
        programs = summary.programs,
        organizations = summary.organizations,
        students = summary.students,
        members = summary.members,
        "registry seeded"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = build_config();
    let outcome = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Seed {
            rng_seed,
            colleges,
            programs,
            organizations,
            students,
            members,
        } => {
            let plan = SeedPlan {
                colleges,
                programs,
                organizations,
                students,
                members,
            };
            run_seed(&config, &plan, rng_seed)
        }
    };
    if let Err(message) = outcome {
        error!(error = %message, "fatal");
        std::process::exit(1);
    }
}
