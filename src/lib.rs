//! # grid-rover
//!
//! A single robot on an unbounded integer grid. Movement commands are queued first
//! and replayed later by [`Robot::execute`], which walks the queue in order and
//! updates the robot's position and compass heading.
//!
//! Commands can be queued directly through the [`Robot`] API, or from a
//! [Symbios](https://crates.io/crates/symbios) symbol sequence via
//! [`CommandInterpreter`], which is how the text scripts accepted by
//! [`parse_script`] are fed in.

pub mod command;
pub mod config;
pub mod error;
pub mod heading;
pub mod interpreter;
pub mod robot;
pub mod script;

pub use command::*;
pub use config::*;
pub use error::*;
pub use heading::*;
pub use interpreter::*;
pub use robot::*;
pub use script::*;
