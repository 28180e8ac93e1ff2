use std::io::Write;
use clap::Parser;
use url::Url;
use phish_check::{
    api::models::CheckReport,
    client::CheckClient,
    presentation::ResultView,
    session::Session,
    validator::normalize,
    verdict::ParsedVerdict,
};

/// Command-line front-end for the URL phishing checker.
#[derive(Debug, Parser)]
#[command(name = "phish-check")]
#[command(about = "Ask a phishing-detection service whether URLs are safe", long_about = None)]
pub struct Cli {
    /// URLs to check. Without any, reads one URL per line from stdin.
    pub urls: Vec<String>,

    /// Base URL of the checker service (overrides PHISH_CHECK_API_BASE).
    #[arg(long, value_name = "URL")]
    pub api_base: Option<Url>,

    /// Print one JSON report per line instead of the result screen.
    #[arg(long)]
    pub json: bool,
}

/// Exit status for a batch: any rejected input fails it; verdicts (even `Error`) do not.
pub fn exit_code(all_accepted: bool) -> i32 {
    if all_accepted { 0 } else { 1 }
}

/// Checks each input in order, returning to a fresh input after each one.
pub async fn check_all<W: Write>(
    client: &CheckClient,
    session: &mut Session,
    urls: &[String],
    json: bool,
    out: &mut W,
) -> bool {
    let mut all_accepted = true;
    for raw in urls {
        all_accepted &= check_one(client, session, raw, json, out).await;
        session.back();
    }
    all_accepted
}

/// Returns `false` if the input never reached the checker.
pub async fn check_one<W: Write>(
    client: &CheckClient,
    session: &mut Session,
    raw: &str,
    json: bool,
    out: &mut W,
) -> bool {
    match session.run(client, raw).await {
        Ok(verdict) => {
            if let Err(e) = write_verdict(out, raw, &verdict, json) {
                tracing::warn!(error = %e, "failed to write result");
            }
            true
        }
        Err(err) => {
            eprintln!("{}: {}", raw.trim(), err);
            false
        }
    }
}

fn write_verdict<W: Write>(
    out: &mut W,
    raw: &str,
    verdict: &ParsedVerdict,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let report = CheckReport::new(normalize(raw), verdict.clone());
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "{}", ResultView::from_verdict(verdict))?;
    }
    Ok(())
}
