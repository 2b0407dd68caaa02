//! Terminal front-end for the to-do list.
//!
//! # Responsibility
//! - Resolve configuration (environment, then flags) and start logging.
//! - Drive the home screen from stdin or a script file.

mod repl;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use todo_core::{init_logging_with, AppConfig, HomeScreen, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about = "In-memory to-do list")]
#[command(long_about = r#"In-memory to-do list driven by line commands.

COMMANDS:
    add <title>         Add a task (duplicate titles are rejected)
    toggle <n>          Toggle completion of row n
    edit <n>            Enter edit mode for row n (again to cancel)
    title <n> <text>    Change the pending title of row n
    submit <n>          Save the pending title of row n
    cancel <n>          Leave edit mode, restoring the title
    delete <n>          Remove row n after confirmation
    list | json         Show the list
    help | quit

Tasks are kept in memory and discarded on exit."#)]
struct Args {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Do not write log files
    #[arg(long)]
    no_log: bool,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.no_log {
        let config = resolve_config(&args)?;
        init_logging_with(config.log_level, &config.log_dir).map_err(|err| {
            anyhow!(
                "failed to initialize logging in {}: {err}",
                config.log_dir.display()
            )
        })?;
    }

    info!(
        "event=cli_start module=cli status=ok mode={}",
        if args.script.is_some() { "script" } else { "interactive" }
    );
    let mut screen = HomeScreen::in_memory();
    let stdout = io::stdout();
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            repl::run(&mut screen, BufReader::new(file), stdout.lock(), false)?;
        }
        None => {
            let stdin = io::stdin();
            repl::run(&mut screen, stdin.lock(), stdout.lock(), true)?;
        }
    }

    info!(
        "event=cli_exit module=cli status=ok tasks={}",
        screen.store().task_count()
    );
    Ok(())
}

fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::from_env().context("invalid logging environment")?;
    if let Some(raw) = &args.log_level {
        config.log_level = LogLevel::parse(raw)
            .with_context(|| format!("unsupported log level `{raw}`"))?;
    }
    if let Some(dir) = &args.log_dir {
        if !dir.is_absolute() {
            bail!("--log-dir must be an absolute path, got {}", dir.display());
        }
        config.log_dir = dir.clone();
    }
    Ok(config)
}
