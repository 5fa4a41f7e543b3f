use super::simulate_latency;
use colored::Colorize;
use osis_vote::identity;
use osis_vote::model::voter::Voter;

/// Check a single credential triple. Returns the voter on success.
pub async fn login(role: &str, username: &str, password: &str, latency_ms: u64) -> Option<Voter> {
    simulate_latency(latency_ms).await;

    match identity::validate(role, &username.to_uppercase(), password) {
        Ok(voter) => {
            println!(
                "✅ Selamat datang, {}! ({})",
                voter.role.label().bright_green().bold(),
                voter.id.bright_cyan()
            );
            if voter.role.can_vote() {
                println!("   Silakan pilih calon ketua OSIS.");
            } else {
                println!("   Akses hasil pemilihan terbuka.");
            }
            Some(voter)
        }
        Err(rejected) => {
            eprintln!("❌ {}", rejected.to_string().red());
            eprintln!("   Login gagal. Periksa kembali kredensial Anda.");
            if let Ok(role) = role.parse::<osis_vote::model::voter::Role>() {
                eprintln!("   {}", role.credential_hint().dimmed());
            }
            None
        }
    }
}
