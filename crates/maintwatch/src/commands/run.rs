use super::{build_poller, runtime};
use maintwatch::{run_status_loop, Config};
use tokio::sync::watch;
use tracing::info;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let every = config.check_interval()?;
    let poller = build_poller(config)?;
    let state = poller.state();

    runtime()?.block_on(async {
        let (status_tx, _status_rx) = watch::channel(String::new());
        info!(
            every_secs = every.as_secs(),
            status_every_secs = config.status_refresh.as_secs(),
            store = %config.store_path.display(),
            "watching for maintenance announcements"
        );

        tokio::select! {
            _ = poller.run(every) => {}
            _ = run_status_loop(state, config.status_refresh, config.display_offset, status_tx) => {}
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("shutting down");
            }
        }
        Ok::<_, anyhow::Error>(())
    })
}
