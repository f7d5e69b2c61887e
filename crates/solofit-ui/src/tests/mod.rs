//! Behavioral tests for UI components
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on component behavior rather than implementation details.

mod toast_behaviors;
