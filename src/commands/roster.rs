use colored::Colorize;
use osis_vote::reports::{load_roster, ReportResult};
use std::path::Path;

pub fn roster(roster_path: Option<&Path>) -> ReportResult<()> {
    let roster = load_roster(roster_path)?;

    println!(
        "👥 {} candidates{}",
        roster.len().to_string().bright_yellow(),
        roster_path
            .map(|p| format!(" from {}", p.display()))
            .unwrap_or_default()
    );

    for candidate in roster.candidates() {
        println!(
            "  Calon {}  {}  ({})",
            candidate.id.bright_cyan(),
            candidate.name.bold(),
            candidate.position
        );
    }

    Ok(())
}
