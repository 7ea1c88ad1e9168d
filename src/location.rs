//! Types shared with the location lookup service.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::OutOfDomainError;

/// How a location lookup treats previously cached fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CacheUseMode {
    /// Never consult cached data; always perform a fresh lookup.
    Ignore,

    /// Prefer a cached fix when one is available, falling back to a fresh
    /// lookup otherwise.
    First,

    /// Use cached data exclusively and never perform a fresh lookup.
    Only,
}

impl CacheUseMode {
    /// Converts a raw policy value into the cache mode.
    ///
    /// Values outside the declared domain are rejected.
    pub fn from_raw(raw: u32) -> Result<CacheUseMode, OutOfDomainError> {
        match raw {
            0 => Ok(CacheUseMode::Ignore),
            1 => Ok(CacheUseMode::First),
            2 => Ok(CacheUseMode::Only),
            _ => Err(OutOfDomainError::new("CacheUseMode", raw)),
        }
    }

    /// Whether the lookup may serve a cached fix.
    pub fn uses_cache(self) -> bool {
        !matches!(self, CacheUseMode::Ignore)
    }

    /// Whether the lookup may fall through to a fresh platform query.
    pub fn allows_fresh_lookup(self) -> bool {
        !matches!(self, CacheUseMode::Only)
    }
}

impl From<CacheUseMode> for u32 {
    fn from(mode: CacheUseMode) -> Self {
        match mode {
            CacheUseMode::Ignore => 0,
            CacheUseMode::First => 1,
            CacheUseMode::Only => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CacheUseMode;

    #[test]
    fn members_round_trip() {
        for mode in [CacheUseMode::Ignore, CacheUseMode::First, CacheUseMode::Only] {
            assert_eq!(CacheUseMode::from_raw(u32::from(mode)), Ok(mode));
        }
    }

    #[test]
    fn raw_one_prefers_cache_with_fallback() {
        let mode = CacheUseMode::from_raw(1).unwrap();
        assert_eq!(mode, CacheUseMode::First);
        assert!(mode.uses_cache());
        assert!(mode.allows_fresh_lookup());
    }

    #[test]
    fn ignore_and_only_are_exclusive_policies() {
        assert!(!CacheUseMode::Ignore.uses_cache());
        assert!(CacheUseMode::Ignore.allows_fresh_lookup());
        assert!(CacheUseMode::Only.uses_cache());
        assert!(!CacheUseMode::Only.allows_fresh_lookup());
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        assert!(CacheUseMode::from_raw(3).is_err());
    }
}
