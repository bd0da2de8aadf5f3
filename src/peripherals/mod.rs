//! Device-facing pieces: battery state and the render surface

pub mod battery;
pub mod display;
