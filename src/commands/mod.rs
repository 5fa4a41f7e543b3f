mod login;
mod roster;
mod session;
mod tally;

pub use login::login;
pub use roster::roster;
pub use session::session;
pub use tally::tally;

use std::time::Duration;

/// Cosmetic pause that stands in for network latency. Zero skips it.
async fn simulate_latency(latency_ms: u64) {
    if latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;
    }
}
