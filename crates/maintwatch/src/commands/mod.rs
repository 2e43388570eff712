pub mod check;
pub mod parse;
pub mod run;
pub mod status;
pub mod version;

use maintwatch::{Config, Poller};
use maintwatch_source::TwitterSource;
use maintwatch_store::WindowStore;

pub(crate) fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

pub(crate) fn open_store(config: &Config) -> anyhow::Result<Box<dyn WindowStore>> {
    tracing::debug!(path = %config.store_path.display(), "opening window store");
    Ok(maintwatch_store::open(&config.store_path)?)
}

pub(crate) fn build_poller(
    config: &Config,
) -> anyhow::Result<Poller<TwitterSource, Box<dyn WindowStore>>> {
    let source = TwitterSource::with_base_url(
        config.api_base.clone(),
        config.bearer_token()?.to_string(),
        config.query.clone(),
    )?;
    Poller::new(source, open_store(config)?)
}
