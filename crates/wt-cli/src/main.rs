use std::io;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wt_cli::commands::{add, between, check, remind, shift, status};
use wt_cli::{Cli, Commands, Config};

/// Picks the deadline from the command line, then from the config.
fn resolve_deadline(flag: Option<NaiveDateTime>, config: &Config) -> Result<NaiveDateTime> {
    flag.or(config.deadline)
        .context("no deadline given: pass --deadline or set `deadline` in the config file")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    // The engine never reads the clock; this is the only place `now` comes from.
    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());
    let schedule = &config.schedule;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Status { deadline, json } => {
            let deadline = resolve_deadline(*deadline, &config)?;
            status::run(&mut stdout, schedule, now, deadline, *json)?;
        }
        Commands::Check { at } => {
            check::run(&mut stdout, schedule, at.unwrap_or(now))?;
        }
        Commands::Between { start, end } => {
            between::run(&mut stdout, schedule, *start, *end)?;
        }
        Commands::Add {
            from,
            hours,
            minutes,
        } => {
            add::run(
                &mut stdout,
                schedule,
                from.unwrap_or(now),
                hours.as_deref().unwrap_or_default(),
                minutes.as_deref().unwrap_or_default(),
            )?;
        }
        Commands::Shift { by, deadline } => {
            shift::run(&mut stdout, schedule, now, deadline.or(config.deadline), *by)?;
        }
        Commands::Remind { deadline } => {
            let deadline = resolve_deadline(*deadline, &config)?;
            remind::run(&mut stdout, schedule, &config.reminders, now, deadline)?;
        }
    }

    Ok(())
}
