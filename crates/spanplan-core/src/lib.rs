//! # Spanplan Core Library
//!
//! A library for scaffold layout planning: computing the clearance between a
//! building's exterior faces and the erected scaffold line, and the resulting
//! total scaffold lengths, under discrete assembly-unit constraints and
//! optional eave/site-boundary restrictions.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the assembly-unit constants,
//!   unit-alignment arithmetic, and the immutable [`core::edge::Edge`] record
//!   every calculation produces.
//!
//! - **[`engine`]: The Logic Core.** The clearance/span optimization engine:
//!   the span optimizer, the extended-span resolver for narrow constraint
//!   windows, the corner propagator for dependent edges, and the
//!   boundary-constrained clamp-and-shift variants.
//!
//! - **[`workflows`]: The Public API.** Shape composers: fixed pipelines
//!   that wire the engine's primitives into a complete, strongly-typed
//!   layout for one building footprint family (rectangle, L-shape, concave,
//!   stair chain, two-level protrusion, boundary-constrained).
//!
//! All computation is synchronous, deterministic, and stateless: every call
//! is an independent transformation of numeric inputs into a result record.

pub mod core;
pub mod engine;
pub mod workflows;
