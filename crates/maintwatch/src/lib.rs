//! Maintenance announcement watcher: poll loop, shared state and message rendering

pub mod config;
pub mod poller;
pub mod render;
pub mod state;

pub use config::Config;
pub use poller::{run_status_loop, CycleOutcome, Poller};
pub use state::WatchState;
