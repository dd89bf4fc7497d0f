//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; the types and functions callers need are re-exported
//! from the model's module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate to
//! the core API. A single `core` is exposed through several adapters, one per
//! calculation.

pub mod thermal;
