// crates/meetup-cli/src/cli.rs - Command-line interface definition

use clap::Parser;
use meetup_core::RawInput;

/// Generate a meetup event article into the site's content directory
#[derive(Parser)]
#[command(name = "meetup-gen")]
#[command(about = "Generate a meetup event article from the built-in template")]
#[command(version)]
pub struct Cli {
    /// Event date in YYYY-MM-DD form; also names the output file
    pub date: String,

    /// Skip interactive prompts, taking defaults for unsupplied fields
    #[arg(long)]
    pub quiet: bool,

    /// Author name for the article header
    #[arg(long)]
    pub author: Option<String>,

    /// Event start time, 24-hour HH:MM[:SS]
    #[arg(long)]
    pub start_time: Option<String>,

    /// Event end time, 24-hour HH:MM[:SS]
    #[arg(long)]
    pub end_time: Option<String>,

    /// IANA time zone identifier, e.g. US/Pacific
    #[arg(long, alias = "tz")]
    pub time_zone: Option<String>,

    /// Event URL for the article header
    #[arg(long)]
    pub url: Option<String>,

    /// Index into the venue table (defaults to 0)
    #[arg(long)]
    pub location: Option<usize>,
}

impl Cli {
    /// The raw, not-yet-validated field set the resolver consumes.
    pub fn into_raw_input(self) -> RawInput {
        RawInput {
            date: self.date,
            author: self.author,
            start_time: self.start_time,
            end_time: self.end_time,
            time_zone: self.time_zone,
            url: self.url,
            location: self.location,
            quiet: self.quiet,
        }
    }
}
