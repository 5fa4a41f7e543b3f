use colored::Colorize;
use osis_vote::reports::generator::{generate_report, generate_report_in, print_summary};
use osis_vote::reports::{load_roster, load_votes, ReportResult};
use std::path::Path;
use tracing::info;

pub fn tally(
    votes_path: &Path,
    roster_path: Option<&Path>,
    json: bool,
    utc: bool,
) -> ReportResult<()> {
    let roster = load_roster(roster_path)?;
    let votes = load_votes(votes_path)?;
    info!(votes = votes.len(), candidates = roster.len(), "tallying");

    let report = if utc {
        generate_report_in(&chrono::Utc, &roster, &votes)
    } else {
        generate_report(&roster, &votes)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "🔍 Tallying {} votes from {}",
            votes.len().to_string().bright_yellow(),
            votes_path.display().to_string().bright_cyan()
        );
        print_summary(&report);
    }

    Ok(())
}
