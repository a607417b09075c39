use anyhow::Context;
use clap::{Parser, ValueEnum};
use numscale::{FormatMode, stringify};
use serde::Serialize;
use std::io::BufRead;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Long,
    Short,
    Scientific,
    MinSec,
    HourMinSec,
}

impl From<Mode> for FormatMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Long => FormatMode::LongText,
            Mode::Short => FormatMode::ShortText,
            Mode::Scientific => FormatMode::ScientificNotation,
            Mode::MinSec => FormatMode::SecondsToMinSec,
            Mode::HourMinSec => FormatMode::SecondsToHourMinSec,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(name = "stringify")]
#[command(about = "Humanize numeric text read line by line from stdin")]
struct Options {
    /// The output form to produce for each line
    #[arg(long, value_enum, default_value_t = Mode::Long)]
    mode: Mode,

    /// Emit one JSON object per line instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Line<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let options = Options::parse();
    let mode = FormatMode::from(options.mode);

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let result = stringify(&line, mode);
        if options.json {
            let (output, error) = match result {
                Ok(output) => (Some(output), None),
                Err(error) => (None, Some(error.to_string())),
            };
            let line = Line {
                input: &line,
                output,
                error,
            };
            println!("{}", serde_json::to_string(&line)?);
        } else {
            match result {
                Ok(output) => println!("{output}"),
                Err(error) => warn!(%error, "skipping line"),
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    fmt().compact().with_env_filter(env_filter).init();
}
