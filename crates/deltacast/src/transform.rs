//! Timing transforms between absolute and delta encodings.
//!
//! Both directions are pure recurrences over `(accumulator, time)`. The
//! arithmetic runs in base-10 decimals and rounds once per operation on the
//! way back to `f64`; repeated binary-float addition across thousands of
//! events accumulates visible drift, while the decimal recurrence keeps
//! Delta followed by Accumulate a lossless round trip.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Transform direction for one transcoding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Rewrite absolute times as differences from the previous event.
    Delta,
    /// Rewrite delta times as a running sum, restoring absolute times.
    Accumulate,
}

impl Direction {
    /// Apply the transform to one event time.
    ///
    /// Returns `(new_accumulator, new_time)`. The accumulator must be seeded
    /// with 0 at stream start and fed back in arrival order, one call per
    /// event.
    #[must_use]
    pub fn apply(self, accumulator: f64, time: f64) -> (f64, f64) {
        match self {
            Self::Delta => (time, decimal_sub(time, accumulator)),
            Self::Accumulate => {
                let sum = decimal_add(time, accumulator);
                (sum, sum)
            }
        }
    }
}

/// `lhs - rhs` in decimal arithmetic. Values with no decimal representation
/// (non-finite, or beyond `Decimal` range) fall back to binary floats.
fn decimal_sub(lhs: f64, rhs: f64) -> f64 {
    Decimal::from_f64(lhs)
        .zip(Decimal::from_f64(rhs))
        .and_then(|(l, r)| l.checked_sub(r))
        .and_then(|difference| difference.to_f64())
        .unwrap_or(lhs - rhs)
}

/// `lhs + rhs` in decimal arithmetic, with the same fallback as
/// [`decimal_sub`].
fn decimal_add(lhs: f64, rhs: f64) -> f64 {
    Decimal::from_f64(lhs)
        .zip(Decimal::from_f64(rhs))
        .and_then(|(l, r)| l.checked_add(r))
        .and_then(|sum| sum.to_f64())
        .unwrap_or(lhs + rhs)
}
