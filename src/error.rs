//! Common error types.

use std::{error, fmt};

/// The error type for raw integer values outside a declared value domain.
///
/// Returned by the `from_raw` conversions throughout this crate. Carries the
/// rejected value together with the name of the domain that rejected it.
#[derive(Clone, PartialEq, Eq)]
pub struct OutOfDomainError {
    domain: &'static str,
    value: u32,
}

impl OutOfDomainError {
    pub(crate) fn new(domain: &'static str, value: u32) -> OutOfDomainError {
        OutOfDomainError { domain, value }
    }

    /// The name of the value domain that rejected the value.
    pub fn domain(&self) -> &'static str {
        self.domain
    }

    /// The rejected raw value.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Debug for OutOfDomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("OutOfDomainError")
            .field("domain", &self.domain)
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for OutOfDomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "raw value {} is not a member of {}", self.value, self.domain)
    }
}

impl error::Error for OutOfDomainError {}
