//! System bar visibility behavior.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::OutOfDomainError;

/// How hidden system bars are revealed again by user interaction.
///
/// The raw values are the window-insets controller constants of the platform
/// windowing API and are handed to it unchanged. They must never be
/// renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SystemBarBehavior {
    /// Any touch on the display reveals the hidden bars.
    ShowBarsByTouch,

    /// A swipe from the edge the bars are hidden behind reveals them, and
    /// they stay visible.
    ShowBarsBySwipe,

    /// A swipe from the edge transiently reveals the bars as translucent
    /// overlays; they hide again after a short delay.
    ShowTransientBarsBySwipe,
}

impl SystemBarBehavior {
    /// Converts a raw platform constant into the behavior.
    ///
    /// Values outside the declared domain are rejected.
    pub fn from_raw(raw: u32) -> Result<SystemBarBehavior, OutOfDomainError> {
        match raw {
            0 => Ok(SystemBarBehavior::ShowBarsByTouch),
            1 => Ok(SystemBarBehavior::ShowBarsBySwipe),
            2 => Ok(SystemBarBehavior::ShowTransientBarsBySwipe),
            _ => Err(OutOfDomainError::new("SystemBarBehavior", raw)),
        }
    }
}

impl From<SystemBarBehavior> for u32 {
    fn from(behavior: SystemBarBehavior) -> Self {
        match behavior {
            SystemBarBehavior::ShowBarsByTouch => 0,
            SystemBarBehavior::ShowBarsBySwipe => 1,
            SystemBarBehavior::ShowTransientBarsBySwipe => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SystemBarBehavior;

    #[test]
    fn raw_values_match_the_platform_constants() {
        assert_eq!(u32::from(SystemBarBehavior::ShowBarsByTouch), 0);
        assert_eq!(u32::from(SystemBarBehavior::ShowBarsBySwipe), 1);
        assert_eq!(u32::from(SystemBarBehavior::ShowTransientBarsBySwipe), 2);
    }

    #[test]
    fn members_round_trip() {
        for behavior in [
            SystemBarBehavior::ShowBarsByTouch,
            SystemBarBehavior::ShowBarsBySwipe,
            SystemBarBehavior::ShowTransientBarsBySwipe,
        ] {
            assert_eq!(SystemBarBehavior::from_raw(u32::from(behavior)), Ok(behavior));
        }
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        assert!(SystemBarBehavior::from_raw(3).is_err());
    }
}
