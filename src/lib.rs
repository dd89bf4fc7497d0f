//! # Twine Cable
//!
//! Thermal rating models for underground power cables, following the
//! IEC 60853-2 method, built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! A cable is described by a [`CableThermalSpec`](models::thermal::cable::CableThermalSpec):
//! its conductor and up to four radial thermal stages out to ambient. From a
//! spec the crate computes
//!
//! - the steady conductor temperature for a sustained current,
//! - the conductor temperature after a step change in current,
//! - the steady temperature profile through the cable and its surroundings,
//! - the emergency rating: the largest current the cable can carry for a
//!   bounded duration without exceeding a temperature limit.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! The solvers emit [`tracing`] events (runaway detection and bracket expansion
//! at `debug`, ratings beyond the IEC scaling limit at `warn`). No subscriber
//! is installed by this crate.

pub mod models;
pub mod support;
