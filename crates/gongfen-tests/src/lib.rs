//! Scenario test suite for Gongfen.
//!
//! Integration tests that drive the engine the way the surrounding
//! application does: contributions in, budgeted and time-adjusted points out.

pub mod helpers;
