//! Core traits and types shared by CPU cores and their hosts.

mod bus;

pub use bus::{Bus, SimpleBus};
