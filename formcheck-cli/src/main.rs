//! CLI entry point for formcheck.
//!
//! Loads a form document, attaches the validator, replays UI events against
//! it and prints what happened. All validation logic lives in `formcheck`.

mod logging;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use formcheck::prelude::*;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "formcheck",
    version,
    about = "Validate a form document by replaying UI events"
)]
struct Cli {
    /// Form document (JSON element tree).
    form: PathBuf,

    /// Id of the form to attach to (first form when omitted).
    #[arg(long)]
    form_id: Option<String>,

    /// Validator config (JSON). Defaults apply to missing keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event script (JSON array of events) replayed before the flags below.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Set a control's value, as ID=VALUE. Repeatable.
    #[arg(long = "set", value_name = "ID=VALUE")]
    set: Vec<String>,

    /// Check a radio or checkbox by id. Repeatable.
    #[arg(long = "check", value_name = "ID")]
    check: Vec<String>,

    /// Blur a control by id, validating its field group. Repeatable.
    #[arg(long = "blur", value_name = "ID")]
    blur: Vec<String>,

    /// Do not submit after replaying the events.
    #[arg(long)]
    no_submit: bool,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Also write the log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level, cli.log_file.as_deref()) {
        eprintln!("Error: {e:#}");
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every field group is valid as of its latest validation
/// and no submission failed.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let document: Element = read_json(&cli.form).context("failed to load form document")?;

    let mut config: ValidatorConfig = match &cli.config {
        Some(path) => read_json(path).context("failed to load validator config")?,
        None => ValidatorConfig::default(),
    };
    if cli.form_id.is_some() {
        config.form_id = cli.form_id.clone();
    }

    let mut controller = FormController::attach(document, config)?;
    let events = collect_events(cli)?;

    let mut submitter = |_: &Element, values: &FormValues| -> Result<(), SubmitError> {
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| SubmitError::Rejected(e.to_string()))?;
        println!("{json}");
        Ok(())
    };

    let mut failing = BTreeSet::new();
    let mut submit_failed = false;
    for event in &events {
        let outcome = controller.handle_event(event, &mut submitter);
        match &outcome {
            Outcome::Ignored => println!("ignored: {event:?}"),
            Outcome::Updated => {}
            Outcome::FieldValidated { group, result } => {
                match result.error() {
                    Some(error) => println!("✗ {}: {}", error.label, error.message),
                    None => {
                        let name = controller.validator().groups()[*group].legend_or_label();
                        println!("✓ {name}");
                    }
                }
                if result.is_valid() {
                    failing.remove(group);
                } else {
                    failing.insert(*group);
                }
            }
            Outcome::Submitted { .. } => {
                println!("submitted");
                failing.clear();
            }
            Outcome::Rejected { report } => {
                for error in report.errors() {
                    println!("✗ {}: {}", error.label, error.message);
                }
                println!("rejected: {} invalid field groups", report.errors().count());
                failing = report.errors().map(|e| e.group).collect();
            }
            Outcome::SubmitFailed { error, .. } => {
                println!("submit failed: {error}");
                submit_failed = true;
            }
        }
    }

    Ok(failing.is_empty() && !submit_failed)
}

fn collect_events(cli: &Cli) -> anyhow::Result<Vec<Event>> {
    let mut events: Vec<Event> = match &cli.events {
        Some(path) => read_json(path).context("failed to load event script")?,
        None => Vec::new(),
    };

    for assignment in &cli.set {
        let Some((id, value)) = assignment.split_once('=') else {
            bail!("--set expects ID=VALUE, got {assignment:?}");
        };
        events.push(Event::input(id, value));
    }
    events.extend(cli.check.iter().map(|id| Event::toggle(id.as_str(), true)));
    events.extend(cli.blur.iter().map(|id| Event::blur(id.as_str())));
    if !cli.no_submit {
        events.push(Event::submit());
    }

    Ok(events)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
