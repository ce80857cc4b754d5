//! Entry point for the Payslip Engine binary.
//!
//! Running this binary starts an HTTP server that lists employees
//! and derives payslips from them.  The employee directory is read
//! from the JSON file named by `PAYSLIP_DATA_FILE`; see
//! [`payslip_engine::config::Config::from_env`] for every setting.
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Context;
use payslip_engine::clock::SystemClock;
use payslip_engine::config::Config;
use payslip_engine::payroll::PayrollDeriver;
use payslip_engine::source::JsonFileSource;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(?config, "starting payslip engine");

    let source = Arc::new(JsonFileSource::new(
        config.data_file.clone(),
        config.include_admins,
    ));
    let deriver = PayrollDeriver::new(SystemClock);
    if let Err(err) = payslip_engine::api::serve(&config, source, deriver).await {
        tracing::error!(error = %err, "server stopped");
        return Err(err);
    }
    Ok(())
}
