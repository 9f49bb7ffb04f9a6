use crate::domain::model::MAX_BATCH_LEN;
use crate::utils::error::{ProcessError, Result};

/// Check a batch, reporting the first violation found. Emptiness and length
/// are checked before any element.
pub fn check(values: &[i32]) -> Result<()> {
    if values.is_empty() {
        return Err(ProcessError::EmptyInput);
    }

    if values.len() >= MAX_BATCH_LEN {
        return Err(ProcessError::TooManyValues {
            len: values.len(),
            max: MAX_BATCH_LEN,
        });
    }

    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v <= 0) {
        return Err(ProcessError::NonPositiveValue { index, value });
    }

    Ok(())
}

pub fn validate(values: &[i32]) -> bool {
    match check(values) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("validation failed: {}", e);
            false
        }
    }
}
