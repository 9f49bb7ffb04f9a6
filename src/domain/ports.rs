use crate::domain::model::{Mode, StoreSnapshot};
use crate::utils::error::Result;

/// Explicit surface of a value processor. Every rejection is reported as an
/// error instead of collapsing into a default value.
pub trait Processor {
    fn try_transform(&self, input: i32, mode: &Mode) -> Result<i32>;
    fn check(&self, values: &[i32]) -> Result<()>;
    fn try_append(&mut self, value: i32) -> Result<()>;
    fn snapshot(&self) -> StoreSnapshot;
}
