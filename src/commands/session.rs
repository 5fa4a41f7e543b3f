use super::simulate_latency;
use chrono::Utc;
use colored::Colorize;
use osis_vote::config::Config;
use osis_vote::reports::generator::print_summary;
use osis_vote::reports::{load_roster, save_votes, ReportResult};
use osis_vote::session::Session;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  login <student|teacher|supervisor> <username> <password>
  vote <candidate id>
  results
  whoami
  logout
  quit";

/// Interactive voting booth on stdin. Votes live in memory only unless
/// `export_path` is given.
pub async fn session(config: &Config, export_path: Option<&Path>) -> ReportResult<()> {
    let roster = load_roster(config.roster_path.as_deref())?;
    let mut session = Session::new(roster);

    println!("{}", "🗳️  E-VOTING KETUA OSIS 2025-2026".bright_cyan().bold());
    println!("{}", HELP.dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["login", role, username, password] => {
                simulate_latency(config.latency_ms).await;
                match session.login(role, username, password) {
                    Ok(voter) => println!(
                        "✅ Selamat datang, {}! ({})",
                        voter.role.label().bright_green().bold(),
                        voter.id.bright_cyan()
                    ),
                    Err(rejected) => eprintln!("❌ {}", rejected.to_string().red()),
                }
            }
            ["vote", candidate_id] => {
                simulate_latency(config.latency_ms).await;
                let name = session
                    .roster()
                    .get(candidate_id)
                    .map(|c| c.name.clone());
                match session.cast_vote(candidate_id, Utc::now()) {
                    Ok(_) => println!(
                        "✅ Suara untuk {} tercatat. Terima kasih!",
                        name.unwrap_or_default().bright_green().bold()
                    ),
                    Err(e) => eprintln!("❌ {}", e.to_string().red()),
                }
            }
            ["results"] => match session.results() {
                Ok(report) => print_summary(&report),
                Err(e) => eprintln!("❌ {}", e.to_string().red()),
            },
            ["whoami"] => match session.current_voter() {
                Some(voter) => println!(
                    "{} {} (sudah memilih: {})",
                    voter.role.label(),
                    voter.id.bright_cyan(),
                    voter.has_voted
                ),
                None => println!("{}", "Belum login".dimmed()),
            },
            ["logout"] => {
                if let Some(voter) = session.logout() {
                    println!("👋 {} keluar", voter.id);
                }
            }
            ["quit"] | ["exit"] => break,
            _ => println!("{}", HELP.dimmed()),
        }
    }

    if let Some(path) = export_path {
        save_votes(path, session.votes())?;
        println!(
            "💾 Saved {} votes to {}",
            session.votes().len().to_string().bright_green(),
            path.display()
        );
    }

    Ok(())
}
