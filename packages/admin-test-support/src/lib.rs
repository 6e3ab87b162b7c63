//! Test support utilities for the club admin
//!
//! Logging initialization and Problem Details assertions shared by the
//! integration tests.

pub mod logging;
pub mod problem_details;
