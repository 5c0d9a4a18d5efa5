//! Bento grid layout computation with aspect-ratio classification and first-fit packing.
//!
//! Pure geometry — no pixel operations, no I/O, `no_std` compatible core.
//!
//! # Modules
//!
//! - [`classify`] — Aspect-ratio size classification and manual size tags
//! - [`pack`] — Occupancy-grid packer with opportunistic widening
//! - [`svg`] — Debug SVG rendering of packed grids (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod classify;
#[cfg(feature = "alloc")]
pub mod pack;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from classify module
pub use classify::{GridSize, LayoutError, Size, SizeTag, classify};
#[cfg(feature = "alloc")]
pub use pack::{GridConfig, Placement, optimize};
