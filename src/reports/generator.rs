use super::{ElectionInfo, ResultSummary, ResultsReport};
use crate::model::election::{Roster, VoteRecord};
use crate::reports::tabulation::{tally_in, Tally};
use chrono::{Local, TimeZone, Utc};
use colored::*;

const ELECTION_NAME: &str = "E-VOTING KETUA OSIS";
const ELECTION_PERIOD: &str = "2025-2026";

/// Build the dashboard report, bucketing hours in local time.
pub fn generate_report(roster: &Roster, votes: &[VoteRecord]) -> ResultsReport {
    generate_report_in(&Local, roster, votes)
}

pub fn generate_report_in<Tz: TimeZone>(
    tz: &Tz,
    roster: &Roster,
    votes: &[VoteRecord],
) -> ResultsReport {
    let tally = tally_in(tz, roster, votes);

    let summary = ResultSummary {
        winner: tally.winner().cloned(),
    };

    let unclassified = tally.unclassified();
    let Tally {
        total_votes,
        results,
        cohorts,
        hourly,
    } = tally;

    ResultsReport {
        info: ElectionInfo {
            name: ELECTION_NAME.to_string(),
            period: ELECTION_PERIOD.to_string(),
            num_candidates: roster.len() as u64,
            generated_at: Utc::now(),
        },
        total_votes,
        results,
        cohorts,
        unclassified,
        hourly,
        summary,
    }
}

/// Print the results dashboard to stdout.
pub fn print_summary(report: &ResultsReport) {
    println!(
        "\n{}",
        format!("📊 {} {}", report.info.name, report.info.period)
            .bright_cyan()
            .bold()
    );
    println!("{}", "=".repeat(50).bright_cyan());

    println!(
        "{}: {}",
        "Total Suara".bright_white().bold(),
        report.total_votes.to_string().bright_green().bold()
    );
    println!();

    for (rank, result) in report.results.iter().enumerate() {
        let line = format!(
            "{:>2}. {:<12} {:>5} suara ({:.1}%)",
            rank + 1,
            result.name,
            result.vote_count,
            result.percentage
        );
        if rank == 0 && report.total_votes > 0 {
            println!("{}", line.bright_yellow().bold());
        } else {
            println!("{}", line);
        }
    }

    println!("{}", "-".repeat(50).bright_cyan());
    println!(
        "{}: {}  {}: {}  {}: {}",
        "Siswa".blue(),
        report.cohorts.student.to_string().bright_white(),
        "Guru".magenta(),
        report.cohorts.teacher.to_string().bright_white(),
        "Pengawas".yellow(),
        report.cohorts.supervisor.to_string().bright_white()
    );
    if report.unclassified > 0 {
        println!(
            "{}: {}",
            "Tidak dikenal".red(),
            report.unclassified.to_string().bright_white()
        );
    }

    if !report.hourly.is_empty() {
        println!("{}", "-".repeat(50).bright_cyan());
        for bucket in &report.hourly {
            println!("{:>6}  {}", bucket.label, "█".repeat(bucket.votes as usize).green());
        }
    }

    println!("{}", "=".repeat(50).bright_cyan());
    match &report.summary.winner {
        Some(winner) => println!(
            "🏆 {} {} suara ({:.1}%) • Calon {}",
            winner.name.bright_green().bold(),
            winner.vote_count,
            winner.percentage,
            winner.candidate_id
        ),
        None => println!("{}", "Belum ada suara".dimmed()),
    }

    println!();
}
