//! Types shared by the canvas and chart views.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Axes along which a canvas drawing is mirrored.
    ///
    /// The flags are independent bits and combine with bitwise OR, so a
    /// drawing may be reversed along both axes at once. The empty set leaves
    /// the drawing untouched.
    ///
    /// Membership is tested with [`contains`], not equality; only the empty
    /// set is matched exactly, via [`is_empty`].
    ///
    /// [`contains`]: ReverseMode::contains
    /// [`is_empty`]: ReverseMode::is_empty
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ReverseMode: u32 {
        /// Mirror the drawing left-to-right.
        const HORIZONTAL = 1 << 0;
        /// Mirror the drawing top-to-bottom.
        const VERTICAL   = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::ReverseMode;

    #[test]
    fn flags_are_independent_bits() {
        let both = ReverseMode::HORIZONTAL | ReverseMode::VERTICAL;
        assert_eq!(both.bits(), 3);
        assert_ne!(both, ReverseMode::HORIZONTAL);
        assert_ne!(both, ReverseMode::VERTICAL);
        assert!(both.contains(ReverseMode::HORIZONTAL));
        assert!(both.contains(ReverseMode::VERTICAL));
    }

    #[test]
    fn raw_patterns_round_trip() {
        for raw in 0..=3 {
            let mode = ReverseMode::from_bits(raw).unwrap();
            assert_eq!(mode.bits(), raw);
        }
    }

    #[test]
    fn unknown_bits_are_rejected() {
        assert_eq!(ReverseMode::from_bits(4), None);
        assert_eq!(ReverseMode::from_bits(0b101), None);
    }

    #[test]
    fn empty_set_means_no_reversal() {
        assert!(ReverseMode::default().is_empty());
        assert_eq!(ReverseMode::empty().bits(), 0);
    }
}
