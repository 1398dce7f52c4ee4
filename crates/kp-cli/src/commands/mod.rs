//! Command implementations for kp-cli

pub mod generate;
pub mod platforms;
pub mod run;
pub mod show;

pub use generate::run_generate;
pub use platforms::run_platforms;
pub use run::{RunOptions, run_run};
pub use show::run_show;
