//! Testing utilities
//!
//! Factories for building domain values in tests without going through the
//! parser. They panic on invalid input.

pub mod factories;
