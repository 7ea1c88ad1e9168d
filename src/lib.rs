//! Core value domains for a mobile UI scaffold.
//!
//! This crate contains the closed integer value domains shared between the
//! scaffold's widgets and the platform layers that consume them: the canvas
//! renderer, the safe-area layout container, the system-bar controller, the
//! location lookup service and the interval suppliers.
//!
//! Each domain is a proper enum (or a [`bitflags`] set where members combine)
//! with a stable raw representation. Platform code exchanges the raw integers
//! and converts at the boundary; a raw value outside the declared domain is
//! rejected there with [`error::OutOfDomainError`].

pub mod canvas;
pub mod error;
pub mod location;
pub mod safe_area;
pub mod supplier;
pub mod system_bar;

pub use canvas::ReverseMode;
pub use location::CacheUseMode;
pub use safe_area::SafeAreaApplyMode;
pub use supplier::{ArraySupplierMode, NumberSupplier};
pub use system_bar::SystemBarBehavior;
