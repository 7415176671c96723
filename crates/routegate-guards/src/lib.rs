//! # Routegate Guards - Navigation Gating
//!
//! Feature-flag route guarding: the host router asks, per navigation
//! attempt, whether the target route's declared feature flag permits
//! activation. Decisions preserve the flag backend's synchronicity class
//! (immediate, deferred, or streaming) and never block inside the guard.

#![forbid(unsafe_code)]

pub mod guards;
pub mod prelude;

pub use guards::*;
