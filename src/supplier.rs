//! Number suppliers for retry and animation pacing.
//!
//! A [`NumberSupplier`] hands out one value per call, advancing through its
//! sequence as it goes. Schedulers use them for backoff delays; animated
//! widgets use them for per-frame intervals.

use std::{error, fmt};

use tracing::trace;

use crate::error::OutOfDomainError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// End-of-array policy for [`ArrayNumberSupplier`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArraySupplierMode {
    /// Replicate the last value once traversal runs past the end.
    #[default]
    Clamp,

    /// Reverse the traversal direction at either boundary.
    Mirror,

    /// Wrap back to the first value.
    Repeat,
}

impl ArraySupplierMode {
    /// Converts a raw mode value into the traversal policy.
    ///
    /// Values outside the declared domain are rejected.
    pub fn from_raw(raw: u32) -> Result<ArraySupplierMode, OutOfDomainError> {
        match raw {
            1 => Ok(ArraySupplierMode::Clamp),
            2 => Ok(ArraySupplierMode::Mirror),
            3 => Ok(ArraySupplierMode::Repeat),
            _ => Err(OutOfDomainError::new("ArraySupplierMode", raw)),
        }
    }
}

impl From<ArraySupplierMode> for u32 {
    fn from(mode: ArraySupplierMode) -> Self {
        match mode {
            ArraySupplierMode::Clamp => 1,
            ArraySupplierMode::Mirror => 2,
            ArraySupplierMode::Repeat => 3,
        }
    }
}

/// A stateful source of sequence values.
pub trait NumberSupplier {
    /// Returns the next value in the sequence.
    fn get(&mut self) -> u64;

    /// Restarts the sequence from the beginning.
    fn reset(&mut self) {}
}

/// Supplies the same value forever.
///
/// Example sequence: 1, 1, 1, 1, ...
#[derive(Debug, Clone)]
pub struct FixedNumberSupplier {
    value: u64,
}

impl FixedNumberSupplier {
    pub fn new(value: u64) -> FixedNumberSupplier {
        FixedNumberSupplier { value }
    }
}

impl NumberSupplier for FixedNumberSupplier {
    fn get(&mut self) -> u64 {
        self.value
    }
}

/// An error produced when constructing an [`ArrayNumberSupplier`] without any
/// backing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValuesError {
    _marker: (),
}

impl fmt::Display for EmptyValuesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad("an array supplier requires at least one backing value")
    }
}

impl error::Error for EmptyValuesError {}

/// Traverses a backing array of values.
///
/// What happens when the traversal reaches the last element is governed by
/// the supplier's [`ArraySupplierMode`].
#[derive(Debug, Clone)]
pub struct ArrayNumberSupplier {
    values: Vec<u64>,
    mode: ArraySupplierMode,
    next_index: usize,
    inverse: bool,
}

impl ArrayNumberSupplier {
    /// Creates a supplier over `values`, which must not be empty.
    pub fn new(
        values: Vec<u64>,
        mode: ArraySupplierMode,
    ) -> Result<ArrayNumberSupplier, EmptyValuesError> {
        if values.is_empty() {
            return Err(EmptyValuesError { _marker: () });
        }
        Ok(ArrayNumberSupplier { values, mode, next_index: 0, inverse: false })
    }

    pub fn mode(&self) -> ArraySupplierMode {
        self.mode
    }
}

impl NumberSupplier for ArrayNumberSupplier {
    fn get(&mut self) -> u64 {
        let result = self.values[self.next_index];
        let last = self.values.len() - 1;
        match self.mode {
            ArraySupplierMode::Clamp => {
                if self.next_index < last {
                    self.next_index += 1;
                }
            },
            ArraySupplierMode::Mirror => {
                if self.inverse {
                    if self.next_index > 0 {
                        self.next_index -= 1;
                    } else {
                        self.next_index = 1.min(last);
                        self.inverse = false;
                    }
                } else if self.next_index < last {
                    self.next_index += 1;
                } else {
                    self.next_index = last.saturating_sub(1);
                    self.inverse = true;
                }
            },
            ArraySupplierMode::Repeat => {
                if self.next_index < last {
                    self.next_index += 1;
                } else {
                    self.next_index = 0;
                }
            },
        }
        result
    }

    fn reset(&mut self) {
        self.next_index = 0;
        self.inverse = false;
    }
}

/// Supplies an arithmetic progression capped at a maximum.
///
/// Example sequence: 1, 2, 3, 4, 5, 6, ...
#[derive(Debug, Clone)]
pub struct LinearIncreaseNumberSupplier {
    step: u64,
    max: u64,
    next: u64,
}

impl LinearIncreaseNumberSupplier {
    pub fn new(step: u64, max: u64) -> LinearIncreaseNumberSupplier {
        LinearIncreaseNumberSupplier { step, max, next: step.min(max) }
    }

    /// Creates a supplier whose progression is capped only by the value range.
    pub fn unbounded(step: u64) -> LinearIncreaseNumberSupplier {
        Self::new(step, u64::MAX)
    }
}

impl NumberSupplier for LinearIncreaseNumberSupplier {
    fn get(&mut self) -> u64 {
        let result = self.next;
        let next = self.next.saturating_add(self.step).min(self.max);
        if next == self.max && self.next != self.max {
            trace!(max = self.max, "linear supplier reached its maximum");
        }
        self.next = next;
        result
    }

    fn reset(&mut self) {
        self.next = self.step.min(self.max);
    }
}

/// Supplies a doubling progression capped at a maximum.
///
/// Example sequence: 1, 2, 4, 8, 16, 32, ...
#[derive(Debug, Clone)]
pub struct ExponentialIncreaseNumberSupplier {
    initial: u64,
    max: u64,
    next: u64,
}

impl ExponentialIncreaseNumberSupplier {
    pub fn new(initial: u64, max: u64) -> ExponentialIncreaseNumberSupplier {
        ExponentialIncreaseNumberSupplier { initial, max, next: initial.min(max) }
    }

    /// Creates a supplier whose progression is capped only by the value range.
    pub fn unbounded(initial: u64) -> ExponentialIncreaseNumberSupplier {
        Self::new(initial, u64::MAX)
    }
}

impl NumberSupplier for ExponentialIncreaseNumberSupplier {
    fn get(&mut self) -> u64 {
        let result = self.next;
        let next = self.next.saturating_mul(2).min(self.max);
        if next == self.max && self.next != self.max {
            trace!(max = self.max, "exponential supplier reached its maximum");
        }
        self.next = next;
        result
    }

    fn reset(&mut self) {
        self.next = self.initial.min(self.max);
    }
}
