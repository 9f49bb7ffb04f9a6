pub mod job;
pub mod store;
pub mod transform;
pub mod validator;

pub use crate::domain::model::{JobReport, Mode, StoreSnapshot, TransformOutcome};
pub use crate::domain::ports::Processor;
pub use crate::utils::error::Result;
