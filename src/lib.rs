pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::JobConfig;

pub use crate::core::{
    job::JobRunner,
    store::DataProcessor,
    transform::{transform, try_transform},
    validator::{check, validate},
    JobReport, Mode, Processor, StoreSnapshot, TransformOutcome,
};
pub use utils::error::{ProcessError, Result};
