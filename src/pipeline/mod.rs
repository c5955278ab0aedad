//! Pipeline entry points for tracker operations.
//!
//! - `run_tracker`: One pass over the store listing, announced to Discord
//! - `run_with`: Same pass with caller-supplied transport and notifier

pub mod run;

pub use run::{RunReport, run_tracker, run_with};
