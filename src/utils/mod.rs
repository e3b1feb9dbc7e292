//! Shared utility helpers

pub mod test_utils;

/// Round a value to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
