use super::{build_poller, runtime};
use maintwatch::{CycleOutcome, Config};

pub fn run(config: &Config) -> anyhow::Result<()> {
    let poller = build_poller(config)?;
    let outcome = runtime()?.block_on(poller.poll_once())?;

    match outcome {
        CycleOutcome::FetchFailed => {
            println!("Fetch failed; stored window unchanged. See logs for details.");
        }
        CycleOutcome::Unchanged(None) => println!("No maintenance window known."),
        CycleOutcome::Unchanged(Some(window)) => {
            println!("Unchanged: {}", serde_json::to_string(&window)?);
        }
        CycleOutcome::Replaced(window) => {
            println!("Replaced: {}", serde_json::to_string(&window)?);
        }
    }
    Ok(())
}
