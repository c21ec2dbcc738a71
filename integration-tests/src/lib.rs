//! Objectives shared by the integration tests.

pub mod problems;
