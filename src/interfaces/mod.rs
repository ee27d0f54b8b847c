//! Outer interfaces: console rendering of shop floor events.

pub mod console;
