use crate::core::{transform, validator, Mode, Processor, StoreSnapshot};
use crate::domain::model::{MAX_STORED_VALUE, STORE_CAPACITY};
use crate::utils::error::{ProcessError, Result};

/// Owns a bounded, append-only sequence of values.
///
/// Every stored value is in `1..MAX_STORED_VALUE` and the store never holds
/// more than `STORE_CAPACITY` values. Not synchronized; wrap it in a `Mutex`
/// to share it between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataProcessor {
    values: Vec<i32>,
}

impl DataProcessor {
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(STORE_CAPACITY),
        }
    }

    pub fn transform(&self, input: i32, mode: &str) -> i32 {
        transform::transform(input, mode)
    }

    pub fn validate(&self, values: &[i32]) -> bool {
        validator::validate(values)
    }

    /// Append `value` if it is in range and there is room left. Rejections
    /// are silent; use [`DataProcessor::try_append`] to see why.
    pub fn append(&mut self, value: i32) {
        if let Err(e) = self.try_append(value) {
            tracing::debug!("append({}) ignored: {}", value, e);
        }
    }

    pub fn try_append(&mut self, value: i32) -> Result<()> {
        if value <= 0 || value >= MAX_STORED_VALUE {
            return Err(ProcessError::ValueOutOfBounds { value });
        }

        if self.is_full() {
            return Err(ProcessError::CapacityExceeded {
                capacity: STORE_CAPACITY,
            });
        }

        self.values.push(value);
        tracing::trace!("stored {} ({}/{})", value, self.values.len(), STORE_CAPACITY);
        Ok(())
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= STORE_CAPACITY
    }

    pub fn remaining(&self) -> usize {
        STORE_CAPACITY - self.values.len()
    }

    pub fn capacity(&self) -> usize {
        STORE_CAPACITY
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            values: self.values.clone(),
            len: self.values.len(),
            capacity: STORE_CAPACITY,
        }
    }
}

impl Processor for DataProcessor {
    fn try_transform(&self, input: i32, mode: &Mode) -> Result<i32> {
        transform::try_transform(input, mode)
    }

    fn check(&self, values: &[i32]) -> Result<()> {
        validator::check(values)
    }

    fn try_append(&mut self, value: i32) -> Result<()> {
        DataProcessor::try_append(self, value)
    }

    fn snapshot(&self) -> StoreSnapshot {
        DataProcessor::snapshot(self)
    }
}
