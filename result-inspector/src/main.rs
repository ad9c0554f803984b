use std::env;
use std::fs;
use std::io::{self, Read};

use env_logger;
use gcm_shared::SendResponse;
use log::{info, warn};

mod errors;
mod report;


use errors::InspectorError;
use report::{Format, Report};

const USAGE: &str = "usage: result-inspector <response.json|-> [tokens.txt]";

fn main() -> anyhow::Result<()> {
    // Initialize env_logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let format = Format::parse(env::var("INSPECTOR_FORMAT").ok().as_deref())?;

    let response_path = args.first().ok_or_else(|| {
        eprintln!("{}", USAGE);
        InspectorError::MissingArgument("response")
    })?;

    check_inputs(response_path, args.get(1).map(String::as_str))?;

    let body = read_input(response_path)?;
    let tokens = match args.get(1) {
        Some(path) => Some(parse_tokens(&read_input(path)?)),
        None => None,
    };

    let report = inspect(&body, tokens)?;

    match format {
        Format::Text => print!("{}", report.render_text()),
        Format::Json => println!("{}", report.render_json()?),
    }

    Ok(())
}

/// Decode a send response and classify each entry against its destination.
///
/// Without tokens, destinations are labelled by their position in the response.
fn inspect(body: &str, tokens: Option<Vec<String>>) -> anyhow::Result<Report> {
    let response = SendResponse::parse(body)?;
    let summary = response.summary();

    let destinations = match tokens {
        Some(tokens) => tokens,
        None => {
            warn!("No token list supplied, labelling destinations by position");
            (0..response.results.len())
                .map(|i| format!("entry-{}", i))
                .collect()
        }
    };

    info!(
        "Inspecting {} results: {} succeeded, {} failed, {} canonical ids",
        response.results.len(),
        summary.success,
        summary.failure,
        summary.canonical_ids
    );

    let results = response.into_results(destinations)?;
    Ok(Report::build(summary, &results))
}

/// Stdin is consumed by the first read, so only one input may come from `-`.
fn check_inputs(response_path: &str, tokens_path: Option<&str>) -> Result<(), InspectorError> {
    if response_path == "-" && tokens_path == Some("-") {
        return Err(InspectorError::StdinReused);
    }
    Ok(())
}

fn read_input(path: &str) -> Result<String, InspectorError> {
    let read_failed = |source: io::Error| InspectorError::ReadFailed {
        path: path.to_string(),
        source,
    };

    if path == "-" {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body).map_err(read_failed)?;
        Ok(body)
    } else {
        fs::read_to_string(path).map_err(read_failed)
    }
}

/// One token per line; blank lines and `#` comments are skipped.
fn parse_tokens(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
