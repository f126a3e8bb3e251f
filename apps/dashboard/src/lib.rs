//! # Barista Dashboard Library
//!
//! The page layer of the Barista Shop admin, driven from the terminal.
//!
//! ## Module Organization
//! ```text
//! barista_dashboard/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── cli.rs          ◄─── Command line definition
//! ├── app.rs          ◄─── Command → guarded page visit
//! ├── layout.rs       ◄─── Sidebar, auth guard, logout
//! ├── pages/
//! │   ├── dashboard.rs
//! │   ├── customers.rs
//! │   ├── items.rs
//! │   ├── orders.rs
//! │   ├── order_details.rs
//! │   ├── login.rs
//! │   └── signup.rs
//! ├── render.rs       ◄─── comfy-table output
//! ├── notify.rs       ◄─── Alerts, notices, confirmations
//! └── error.rs        ◄─── Page error type
//! ```
//!
//! ## Startup Sequence
//! 1. Parse the command line
//! 2. Initialize tracing (logging)
//! 3. Load configuration (`--config`, platform config dir, environment)
//! 4. Build the store (restores the session marker)
//! 5. Run the command on a Tokio runtime
//! 6. Print the page, or alert the failure

pub mod app;
pub mod cli;
pub mod error;
pub mod layout;
pub mod notify;
pub mod pages;
pub mod render;

use std::process::ExitCode;

use anyhow::Context;
use barista_client::{ClientConfig, Store};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use error::AppError;
use notify::{Notifier, TerminalNotifier};

/// Runs the dashboard and maps the outcome to an exit status.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let notifier = TerminalNotifier::new(cli.yes);
    match try_run(cli, &notifier) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<AppError>() {
            Some(app_err) => {
                debug!(error = %app_err.to_json(), "Page action failed");
                notifier.alert(&app_err.message);
                ExitCode::from(app_err.code.exit_code())
            }
            None => {
                error!(error = %err, "Dashboard failed");
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn try_run(cli: Cli, notifier: &TerminalNotifier) -> anyhow::Result<()> {
    let config = match cli.config {
        // An explicit file must load cleanly.
        Some(path) => ClientConfig::load(Some(path)).context("Failed to load configuration")?,
        None => ClientConfig::load_or_default(None),
    };
    info!(api = %config.api.base_url, "Configuration loaded");

    let store = Store::from_config(&config).context("Failed to create client store")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let mut app = App::new(store, notifier, config.currency());
    let output = runtime.block_on(app.execute(cli.command))?;
    println!("{}", output);
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `ERROR`: Failures the admin sees as alerts
/// - `WARN`: Rejected requests, degraded refreshes
/// - `INFO`: Logins, saves, deletes, orders
/// - `DEBUG`: Cart actions, routing
///
/// Logs go to stderr so page output stays clean. Override with `RUST_LOG`,
/// e.g. `RUST_LOG=barista=debug barista orders`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,barista=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
