//! Filesystem utilities for seam.
//!
//! Output artifacts are written atomically so an interrupted run never
//! leaves a truncated document behind.

pub mod atomic;

pub use atomic::atomic_write_file;
