//! Domain core: the shop monitor and its value objects.
//!
//! Everything in this layer is free of I/O; console output and thread
//! management live in the outer layers.

pub mod config;
pub mod event;
pub mod ids;
pub mod ports;
pub mod shop;
