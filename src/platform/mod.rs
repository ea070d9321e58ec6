//! Platform plumbing
//!
//! Handles the outside-world side of the event loop:
//! - Event queue shared by all producers
//! - Periodic tick timer
//! - Keyboard input from the terminal

pub mod input;
pub mod queue;
pub mod timer;

pub use queue::{Event, EventQueue};
pub use timer::{TickSource, TickTimer};
