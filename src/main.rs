use std::io::{self, BufRead, Write};

use color_eyre::Result;
use tracing_subscriber::prelude::*;

#[macro_use]
extern crate tracing;

pub mod builtins;
pub mod cmd;
pub mod config;
pub mod jobs;
pub mod parse;
pub mod reaper;

use jobs::JobRegistry;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let (writer, _guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        std::env::temp_dir(),
        "minish.log",
    ));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_error::ErrorLayer::default())
        .init();

    color_eyre::install()?;

    config::init(config::Config::load()?);
    reaper::install()?;

    let mut jobs = JobRegistry::new(config::get().job_capacity);

    println!("minish, a small fork-based shell. `exit` or end-of-input quits.");

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut line = String::new();

    loop {
        // Completion notices are printed here, on the loop's own turn, never
        // from inside the signal handler.
        for job in reaper::drain(&mut jobs) {
            println!("[{}] done    {}", job.pid, job.command);
        }

        print_prompt()?;

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "exit" {
            println!("exiting minish, goodbye");
            break;
        }

        if line == "jobs" {
            report_jobs(&jobs);
            continue;
        }

        if line.contains('|') {
            if let Err(err) = cmd::pipeline::run(line) {
                eprintln!("minish: {err}");
            }
            continue;
        }

        match parse::tokenize(line) {
            Ok(parsed) if parsed.is_empty() => continue,
            Ok(parsed) => {
                trace!(?parsed, "dispatching command");
                if let Err(err) = cmd::execute::run(parsed, line, &mut jobs) {
                    eprintln!("minish: {err}");
                }
            }
            Err(err) => eprintln!("minish: {err}"),
        }
    }

    Ok(())
}

fn print_prompt() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match std::env::current_dir() {
        Ok(cwd) => write!(stdout, "\n{} {} ", cwd.display(), config::get().prompt)?,
        Err(_) => write!(stdout, "\n{} ", config::get().prompt)?,
    }
    stdout.flush()
}

fn report_jobs(jobs: &JobRegistry) {
    if jobs.is_empty() {
        println!("no background processes");
        return;
    }
    for job in jobs.iter() {
        println!("[{}] {}", job.pid, job.command);
    }
}
