//! File output helpers.

pub mod atomic;
