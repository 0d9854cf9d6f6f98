//! Built-in functions.
//!
//! Both round through truncation: `trunc` moves toward zero, which is the floor for positive
//! values and the ceiling for negative ones, so the other side needs a one step correction.

/// Greatest integer less than or equal to `value`.
pub fn floor(value: f64) -> f64 {
    let truncated = value.trunc();
    if truncated > value {
        truncated - 1.0
    } else {
        truncated
    }
}

/// Least integer greater than or equal to `value`.
pub fn ceil(value: f64) -> f64 {
    let truncated = value.trunc();
    if truncated < value {
        truncated + 1.0
    } else {
        truncated
    }
}
