//! Types used by the safe-area layout container.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::OutOfDomainError;

/// How a layout container compensates for window insets.
///
/// Where system surfaces (status bar, navigation bar, display cutout) overlap
/// the container, the container reserves room for them either outside or
/// inside its own bounds.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SafeAreaApplyMode {
    /// Grow the container's margins by the inset amount, pushing the whole
    /// container out of the overlapped region.
    #[default]
    Margin,

    /// Grow the container's padding by the inset amount, keeping the
    /// container in place and pushing only its content.
    Padding,
}

impl SafeAreaApplyMode {
    /// Converts a raw attribute value into the apply mode.
    ///
    /// Values outside the declared domain are rejected.
    pub fn from_raw(raw: u32) -> Result<SafeAreaApplyMode, OutOfDomainError> {
        match raw {
            1 => Ok(SafeAreaApplyMode::Margin),
            2 => Ok(SafeAreaApplyMode::Padding),
            _ => Err(OutOfDomainError::new("SafeAreaApplyMode", raw)),
        }
    }
}

impl From<SafeAreaApplyMode> for u32 {
    fn from(mode: SafeAreaApplyMode) -> Self {
        match mode {
            SafeAreaApplyMode::Margin => 1,
            SafeAreaApplyMode::Padding => 2,
        }
    }
}
