//! Application layer: the thread-per-actor simulation driver.
//!
//! Spawns one thread per server and one per client, lets them rendezvous
//! through the shop monitor, and reports how many clients were turned away.

pub mod simulation;
