//! Largest element of an integer sequence.

use crate::core::error::{Result, SeqError};

/// Return the largest value in `values` with a single linear scan.
pub fn array_max(values: &[i64]) -> Result<i64> {
    let (&first, rest) = values
        .split_first()
        .ok_or_else(|| SeqError::empty("array_max"))?;
    let mut maximum = first;
    for &value in rest {
        if value > maximum {
            maximum = value;
        }
    }
    Ok(maximum)
}
