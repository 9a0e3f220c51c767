//! starter-configure - Interactive setup wizard for a fresh Laravel project

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use starter_core::{registry, Answers, Outcome, PlanSource, RegistryError, SetupConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "STARTER_LOG";

#[derive(Parser, Debug)]
#[command(name = "starter-configure")]
#[command(about = "Interactive setup wizard to configure your Laravel application")]
#[command(version)]
pub struct Args {
    /// Show what would be done without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Accept every default answer (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Application type to configure, skipping the first question
    #[arg(short = 't', long = "type", value_name = "ARCHETYPE")]
    pub archetype: Option<String>,

    /// YAML file with pre-recorded answers
    #[arg(short, long, value_name = "FILE", conflicts_with = "archetype")]
    pub answers: Option<PathBuf>,

    /// Laravel project directory
    #[arg(short, long, env = "STARTER_PATH", default_value = ".")]
    pub path: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn plan_source(args: &Args) -> Result<PlanSource> {
    if let Some(path) = &args.answers {
        return Ok(PlanSource::Answers(Answers::load(path)?));
    }

    let base_type = match &args.archetype {
        Some(name) => Some(registry::resolve(name)?.archetype()),
        None => None,
    };
    Ok(PlanSource::Interactive { base_type })
}

fn run(args: Args) -> Result<Outcome> {
    let source = plan_source(&args)?;

    let mut config = SetupConfig::new(&args.path);
    config.dry_run = args.dry_run;
    config.assume_defaults = args.yes;
    tracing::debug!(?config, "starting");

    starter_core::run(&config, source)
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logger(args.verbose);

    let result = run(args);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(Outcome::Completed { report, .. }) => {
            tracing::info!(
                tasks = ?report.labels(),
                failed = report.failures().len(),
                "setup finished"
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(RegistryError::ConfiguratorNotFound { requested, known }) =
                e.downcast_ref::<RegistryError>()
            {
                eprintln!("{} Configurator not found: {}", "error:".red().bold(), requested);
                eprintln!("{} {}", "Available:".yellow(), known.join(", "));
            } else {
                eprintln!("{} {:#}", "error:".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}
