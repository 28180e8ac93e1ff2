mod cli;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use phish_check::{config::Config, logging, session::Session, AppState};

use crate::cli::{check_all, check_one, exit_code, Cli};

#[tokio::main]
async fn main() {
    logging::init_logging();

    match run(Cli::parse()).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("phish-check error: {:#}", err);
            std::process::exit(2);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(cli.api_base.clone())?;
    tracing::debug!("loaded config: {:?}", config);

    let state = AppState::new(config)?;
    let mut session = Session::new();
    let mut stdout = std::io::stdout();

    if !cli.urls.is_empty() {
        let all_accepted = check_all(&state.client, &mut session, &cli.urls, cli.json, &mut stdout).await;
        return Ok(exit_code(all_accepted));
    }

    println!("URL Phishing Checker");
    println!("Enter a URL to check if it's malicious (Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        check_one(&state.client, &mut session, &line, cli.json, &mut stdout).await;
        if !cli.json {
            println!("\nCheck another URL:");
        }
        session.back();
    }

    Ok(0)
}
