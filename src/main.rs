use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use error::AppError;
pub use services::catalog::*;
pub use services::config::*;
pub use services::export::*;
pub use services::favorites::*;
pub use services::identity::*;
pub use services::output::*;
pub use services::query::*;
pub use services::store::*;

fn main() {
    // Diagnostics go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let limits = load_limits()?;
    let mut state = load_state()?;

    if handle_account_commands(cli, &mut state)? {
        return Ok(());
    }
    if handle_admin_commands(cli, &mut state)? {
        return Ok(());
    }
    handle_runtime_commands(cli, &mut state, &limits)
}

fn report_failure(json: bool, err: &anyhow::Error) {
    let code = err
        .downcast_ref::<AppError>()
        .map(AppError::code)
        .unwrap_or("INTERNAL");
    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": false,
                "error": { "code": code, "message": err.to_string() }
            })
        );
    } else {
        eprintln!("error: {err:#}");
    }
}
