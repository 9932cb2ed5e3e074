// Event Countdown Monitor
// Main entry point: watches one event and prints its status every second

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use event_countdown::models::schedule::EventSchedule;
use event_countdown::services::countdown::format_breakdown;
use event_countdown::services::refresher::CountdownRefresher;
use event_countdown::utils::clock::SystemClock;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let Some(raw_target) = std::env::args().nth(1) else {
        bail!("usage: event-countdown <rfc3339-target-instant>");
    };

    let schedule = EventSchedule::from_rfc3339(&raw_target)
        .context("target instant must be RFC 3339, e.g. 2025-06-01T18:00:00Z")?;

    log::info!("Monitoring event at {}", schedule.target());

    let mut refresher = CountdownRefresher::new(Arc::new(SystemClock), schedule);
    refresher.start(|snapshot| {
        println!("{:<9} {}", snapshot.status, format_breakdown(&snapshot.breakdown));
    });

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    refresher.stop();

    Ok(())
}
