//! Presentation layer: consumes finished trajectories, never drives the simulation

pub mod playback3d;
