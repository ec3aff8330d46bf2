//! # Engine Module
//!
//! The clearance/span optimization engine. This layer holds the only
//! nontrivial search and derivation logic in the library:
//!
//! - **Span optimization** ([`optimizer`]) - finds the clearance closest to a
//!   target that keeps the total scaffold length on the assembly-unit grid.
//! - **Extended-span resolution** ([`resolver`]) - retries with the 355mm and
//!   150mm extended units when an externally imposed constraint window makes
//!   the standard answer infeasible.
//! - **Corner propagation** ([`propagator`]) - derives a dependent edge's
//!   clearance from an already-settled reference edge across a concave
//!   corner.
//! - **Boundary clamping** ([`boundary`]) - single- and dual-sided site
//!   boundary variants that clamp and redistribute clearances while
//!   preserving (or minimally shrinking) the total length.
//!
//! Hard input faults are reported through [`error::LayoutError`]; an
//! unsatisfiable constraint window is never an error: the engine returns its
//! best-effort candidate with an explicit `satisfied`/`adjusted` flag and
//! leaves the decision to relax constraints to the caller.

pub mod boundary;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod propagator;
pub mod resolver;
