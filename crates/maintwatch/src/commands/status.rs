use super::open_store;
use chrono::Utc;
use maintwatch::render;
use maintwatch::Config;
use maintwatch_core::classify;
use maintwatch_store::WindowStore;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let window = store.get_window()?;
    let now = Utc::now();
    let classification = classify(&now, window.as_ref());

    println!("{}", render::maintenance_reply(&classification));
    println!();
    println!(
        "Activity: {}",
        render::activity_status(&now, &classification, config.display_offset)
    );
    Ok(())
}
