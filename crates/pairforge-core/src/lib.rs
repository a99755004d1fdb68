//! # PairForge Core Library
//!
//! A pairwise-interaction coefficient and cutoff-management engine for
//! short-range particle simulations. PairForge resolves, validates, and
//! transforms per-type-pair interaction parameters into the compact numeric
//! blocks a force/energy compute kernel consumes, and governs how raw
//! interaction laws are shaped near their cutoff radius.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction
//! (`engine` may use `core`, never the reverse):
//!
//! - **[`core`]: The Foundation.** Stateless mathematics and validated data:
//!   the cutoff shaping functions (none/shift/xplor), the polymorphic pair
//!   potential family with its pure coefficient transforms, tabulated
//!   potential data, and time-varying scalar schedules.
//!
//! - **[`engine`]: The Configuration Core.** Stateful orchestration: the
//!   symmetric type-pair coefficient matrix with default resolution and
//!   completeness verification, collaborator interfaces for the type
//!   registry, the neighbor structure, and the compute kernel, per-potential
//!   force configuration, cutoff aggregation, and coefficient-file loading.
//!
//! The actual force/energy evaluation, spatial neighbor search, and
//! simulation bookkeeping live outside this crate; PairForge is their
//! strictly synchronous producer of validated inputs.

pub mod core;
pub mod engine;
