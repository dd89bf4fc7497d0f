//! Thermal systems models.
//!
//! This module contains models for thermal systems, currently the transient
//! and steady-state rating of underground power cables.

pub mod cable;
