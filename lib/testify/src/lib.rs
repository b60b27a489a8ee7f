//! Test helpers shared by the integration tests.

mod portpicker;
pub mod xapi;

pub use portpicker::{next_addr, pick_unused_port};
