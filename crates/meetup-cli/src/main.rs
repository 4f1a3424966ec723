// crates/meetup-cli/src/main.rs - CLI Application Entry Point
//
// Control flow per run:
//   parse args -> resolve parameters (validators + preflight path check)
//   -> render template -> write article
//
// The resolver lives in meetup-core and is pure apart from two injected
// effects: the field source (interactive prompter or quiet defaults) and
// the output-path preflight, both provided here. Every recognized failure
// prints one `error: <message>` line on stderr and exits nonzero.

use std::env;
use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use meetup_core::{Defaults, FieldSource, QuietSource, location_table, params, template};
use tracing_subscriber::EnvFilter;

mod cli;
mod prompt;
mod services;

use cli::Cli;
use prompt::InteractivePrompter;
use services::ContentDir;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let raw = cli.into_raw_input();

    let content = ContentDir::new(env::current_dir()?.join("content"));
    let locations = location_table();
    let defaults = Defaults::new(default_author());

    let mut interactive = InteractivePrompter;
    let mut quiet = QuietSource;
    let source: &mut dyn FieldSource = if raw.quiet { &mut quiet } else { &mut interactive };

    let resolved = params::resolve(&raw, &locations, &defaults, source, |date_key| {
        content.event_path(date_key)
    })?;

    let article = template::render(template::EVENT_TEMPLATE, &resolved.context());
    let path = content.write_article(&resolved.date, &article)?;
    println!("generating event file to {}", path.display());

    Ok(())
}

/// The invoking user's name, used as the author default.
fn default_author() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "meetup organizer".to_string())
}
