//! # Core Module
//!
//! Stateless building blocks for pairwise-interaction management: pure
//! mathematics and validated data structures with no configuration state.
//!
//! ## Overview
//!
//! - **Cutoff shaping** ([`cutoff`]) - The none/shift/xplor policy applied to
//!   a raw potential at its cutoff radius, including the XPLOR smoothing
//!   function and its derivative
//! - **Potential family** ([`potentials`]) - One type per interaction law,
//!   each transforming a resolved coefficient record into the compact
//!   parameter block a compute kernel consumes
//! - **Tabulated data** ([`table`]) - Uniformly spaced (energy, force)
//!   sample tables with strict format validation and nearest-sample lookup
//! - **Schedules** ([`variant`]) - Time-varying scalars used by the
//!   thermostatted potentials
//!
//! Everything in this layer is a pure function of its inputs; mutable
//! configuration state lives in [`crate::engine`].

pub mod cutoff;
pub mod potentials;
pub mod table;
pub mod variant;
