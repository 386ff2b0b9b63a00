//! Placeholder inference services.
//!
//! These functions are the seam where the trained models plug in. Until the
//! models ship, both return fixed placeholder results regardless of input.

pub mod classify;
pub mod growth;
