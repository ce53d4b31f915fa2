//! Unit tests for the distance engine
//!
//! Cross-cutting properties of the hex and file comparators.
//! Tests are organized by module and functionality.
