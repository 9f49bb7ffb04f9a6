use crate::core::Mode;
use crate::utils::error::{ProcessError, Result};

const DOUBLE_CLAMP_FROM: i32 = 100;
const DOUBLE_CLAMPED: i32 = 200;
const DOUBLE_BONUS_ABOVE: i32 = 10;
const DOUBLE_BONUS: i32 = 5;
const TRIPLE_LIMIT: i32 = 50;

/// Derive a value from `input` according to `mode`.
///
/// Non-positive inputs, `triple` inputs of 50 or more and unrecognized modes
/// are rejected with the reason. Below the clamps every arithmetic branch
/// works on inputs under 100, so none of them can overflow.
pub fn try_transform(input: i32, mode: &Mode) -> Result<i32> {
    if input <= 0 {
        return Err(ProcessError::NonPositiveInput { input });
    }

    let even = input % 2 == 0;
    match mode {
        Mode::Double if input >= DOUBLE_CLAMP_FROM => Ok(DOUBLE_CLAMPED),
        Mode::Double if even && input > DOUBLE_BONUS_ABOVE => Ok(input * 2 + DOUBLE_BONUS),
        Mode::Double if even => Ok(input * 2),
        Mode::Double => Ok(input * 2 - 1),
        Mode::Triple if input < TRIPLE_LIMIT => Ok(input * 3),
        Mode::Triple => Err(ProcessError::OutOfRange {
            mode: mode.to_string(),
            input,
            limit: TRIPLE_LIMIT,
        }),
        Mode::Unrecognized(name) => Err(ProcessError::UnrecognizedMode { mode: name.clone() }),
    }
}

/// Compatibility form of [`try_transform`]: every rejection becomes 0, so a
/// computed 0 and a rejected input look the same to the caller.
pub fn transform(input: i32, mode: &str) -> i32 {
    try_transform(input, &Mode::from(mode)).unwrap_or_else(|e| {
        tracing::debug!("transform({}, {:?}) fell back to 0: {}", input, mode, e);
        0
    })
}
