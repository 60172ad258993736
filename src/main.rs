use anyhow::{Context, Result};
use clouddns::config::DEFAULT_ENV_FILE;
use clouddns::{Config, Ddns, Outcome};
use log::error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let env_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string());

    match run(&env_file).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(env_file: &str) -> Result<()> {
    let config = Config::load(env_file).context("Invalid configuration")?;

    let ddns = Ddns::new(config);
    let resolved = ddns.resolve().await.context("DNS update aborted")?;

    println!("Current IP: {}", resolved.current_ip);
    println!("Record IP: {}", resolved.record_ip);

    if let Outcome::Updated { response, .. } =
        ddns.apply(resolved).await.context("DNS update failed")?
    {
        println!("{}", response);
    }
    Ok(())
}
