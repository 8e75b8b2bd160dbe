//! Test modules for the ring queue
//!
//! This module organizes the test suites for the ring queue component.
//! Tests are organized by functional area for better maintainability.

mod iteration;
