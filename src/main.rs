use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use capmatch::{Target, Value, match_with};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Patterns to try in order; the first one matching the whole subject wins
    #[arg(value_name = "PATTERN", required = true)]
    patterns: Vec<String>,

    /// Match this subject instead of reading lines from stdin
    #[arg(short = 's', long, value_name = "TEXT")]
    subject: Option<String>,

    /// Comma-separated capture types (int, char, text); defaults to text
    #[arg(short = 't', long, value_name = "LIST", value_delimiter = ',')]
    types: Vec<Target>,

    /// Line printed when no pattern matches
    #[arg(short = 'd', long, value_name = "TEXT", default_value = "no match")]
    default: String,
}

/// Match one subject, returning the formatted output line.
fn match_line(args: &Args, subject: &str) -> Result<String> {
    let line = match_with(subject, |m| -> Result<Option<String>> {
        for (index, pattern) in args.patterns.iter().enumerate() {
            if !m.test(pattern)? {
                continue;
            }
            let values: Vec<Value> = if args.types.is_empty() {
                m.groups().iter().cloned().map(Value::Text).collect()
            } else {
                m.extract_all(&args.types)?
            };
            return Ok(Some(format!("{}: {}", index, values.iter().join(", "))));
        }
        Ok(None)
    })
    .with_context(|| format!("Failed to match {:?}", subject))?;
    Ok(line.unwrap_or_else(|| args.default.clone()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Some(subject) = args.subject.as_deref() {
        println!("{}", match_line(&args, subject)?);
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        println!("{}", match_line(&args, &line)?);
    }
    Ok(())
}
