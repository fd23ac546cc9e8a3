//! # mars-rover-core
//!
//! Movement and command-interpretation core for a single remote-controlled
//! rover on an unbounded 2D integer grid.
//!
//! It decouples the *mission logic* (pose transitions, command dispatch) from
//! the *hardware and ground segment* (camera, agency sink, identifier source),
//! which sit behind traits so the core can run against real devices, a
//! simulator, or test doubles.

pub mod error;
pub mod mission;
pub mod pose;
pub mod rover;

pub use error::*;
pub use mission::*;
pub use pose::*;
pub use rover::*;
