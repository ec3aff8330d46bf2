//! # Core Module
//!
//! Fundamental building blocks shared by the layout engine and the shape
//! composers: the assembly-unit constants and alignment arithmetic
//! ([`units`]), and the immutable edge record every calculation produces
//! ([`edge`]).

pub mod edge;
pub mod units;
