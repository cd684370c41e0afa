//! Background workers feeding the update loop

mod discovery;

pub use discovery::discovery_events;
