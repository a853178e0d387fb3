// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for the few math operations that can fail at the call site.

use thiserror::Error;

/// Invalid arguments reported by checked accessors and helpers.
///
/// Numeric degeneracies (zero-length vectors, `acos` overshoot) are not errors;
/// they are absorbed with documented fallbacks by the operations themselves.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Signed component index outside `-len..len`.
    #[error("component index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Index supplied by the caller.
        index: isize,
        /// Number of components of the value being indexed.
        len: usize,
    },
    /// `min > max` passed to a clamp.
    #[error("invalid clamp range: {min} > {max}")]
    InvalidRange {
        /// Lower bound supplied by the caller.
        min: f64,
        /// Upper bound supplied by the caller.
        max: f64,
    },
}

/// Maps a signed index onto `0..len`, treating `-1..=-len` as aliases counted
/// from the end.
pub fn resolve_index(index: isize, len: usize) -> Result<usize, MathError> {
    let out_of_range = MathError::IndexOutOfRange { index, len };
    let signed_len = isize::try_from(len).map_err(|_| out_of_range)?;
    let resolved = if index < 0 { index + signed_len } else { index };
    if (0..signed_len).contains(&resolved) {
        usize::try_from(resolved).map_err(|_| out_of_range)
    } else {
        Err(out_of_range)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_index_wraps_negative_aliases() {
        assert_eq!(resolve_index(0, 3).unwrap(), 0);
        assert_eq!(resolve_index(2, 3).unwrap(), 2);
        assert_eq!(resolve_index(-1, 3).unwrap(), 2);
        assert_eq!(resolve_index(-3, 3).unwrap(), 0);
    }

    #[test]
    fn resolve_index_rejects_out_of_range() {
        assert_eq!(
            resolve_index(3, 3),
            Err(MathError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            resolve_index(-4, 3),
            Err(MathError::IndexOutOfRange { index: -4, len: 3 })
        );
    }

    #[test]
    fn display_names_the_index() {
        let msg = MathError::IndexOutOfRange { index: 5, len: 2 }.to_string();
        assert_eq!(msg, "component index 5 out of range for length 2");
    }
}
