//! Reusable observers for descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers without naming their event types.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasIterate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: reports each event through the `log` facade
//! - [`History`]: records the objective at each iterate, optionally stopping
//!   after a fixed number of records
//!
//! [`Observer`]: descent_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;

pub use history::{History, Record};
pub use logging::LogObserver;
