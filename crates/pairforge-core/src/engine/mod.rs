//! # Engine Module
//!
//! Stateful configuration and orchestration for pair potentials.
//!
//! ## Overview
//!
//! The engine layer owns everything that changes during job configuration
//! and mediates between user-supplied coefficients and the external
//! collaborators that consume them:
//!
//! - **Coefficient storage** ([`coeff`]) - The symmetric type-pair matrix
//!   with merge-on-set semantics, lazy default resolution, and completeness
//!   verification producing an immutable resolved snapshot
//! - **Error taxonomy** ([`error`]) - Configuration, verification, and
//!   unsupported-mode errors
//! - **Collaborator interfaces** ([`types`], [`neighbor`], [`kernel`]) -
//!   The type registry, the shared neighbor structure receiving per-pair
//!   cutoffs, and the compute kernel receiving parameter blocks
//! - **Force configuration** ([`pair_force`], [`table_force`]) - One
//!   configured potential instance: coefficient mutation with cutoff
//!   publication, shift-mode enforcement, and the verify/transform/push
//!   dispatch pass
//! - **Coefficient files** ([`coeff_file`]) - TOML descriptions of defaults
//!   and per-pair coefficient blocks
//!
//! ## Lifecycle
//!
//! Configuration calls (`set`, `set_default`, shift-mode selection) are
//! strictly ordered before verification and dispatch; every mutation pushes
//! the potential's resolved cutoff mapping to the shared neighbor table so
//! the spatial query structure is never sized from stale radii.

pub mod coeff;
pub mod coeff_file;
pub mod error;
pub mod kernel;
pub mod neighbor;
pub mod pair_force;
pub mod table_force;
pub mod types;
