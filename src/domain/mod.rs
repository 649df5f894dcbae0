//! Domain layer
//!
//! Configuration sources, the text stream they produce, credential header
//! derivation, and the ports they depend on.

pub mod errors;
pub mod models;
pub mod ports;
