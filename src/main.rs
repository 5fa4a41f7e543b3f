mod commands;

use crate::commands::{login, roster, session, tally};
use clap::{Parser, Subcommand};
use colored::Colorize;
use osis_vote::config::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Opts {
    /// Artificial delay before login and vote submission, in milliseconds.
    #[clap(long, global = true)]
    latency_ms: Option<u64>,
    /// Roster JSON file (defaults to the built-in ballot).
    #[clap(long, global = true)]
    roster: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the candidates on the ballot.
    Roster,
    /// Check a credential triple.
    Login {
        /// student, teacher or supervisor
        role: String,
        username: String,
        password: String,
    },
    /// Tally an exported vote list.
    Tally {
        /// Vote list JSON file
        votes: PathBuf,
        /// Print the report as JSON instead of a table
        #[clap(long)]
        json: bool,
        /// Bucket hours in UTC instead of local time
        #[clap(long)]
        utc: bool,
    },
    /// Run an interactive voting session on stdin.
    Session {
        /// Write the vote list here on exit
        #[clap(long)]
        export: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let config = Config::load().with_overrides(opts.latency_ms, opts.roster);

    let result = match opts.command {
        Command::Roster => roster(config.roster_path.as_deref()),
        Command::Login {
            role,
            username,
            password,
        } => {
            if login(&role, &username, &password, config.latency_ms)
                .await
                .is_none()
            {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Tally { votes, json, utc } => {
            tally(&votes, config.roster_path.as_deref(), json, utc)
        }
        Command::Session { export } => session(&config, export.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "❌".red(), e.to_string().red());
        std::process::exit(1);
    }
}
