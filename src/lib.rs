//! Cannon Climb - side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player state machine, hazard playback,
//!   collision checks, victory particles)
//! - `tuning`: Data-driven gameplay balance
//!
//! Rendering, asset loading, and input polling live outside this crate. Each
//! frame the embedding layer samples input intents into a [`sim::TickInput`],
//! calls [`sim::tick`], and reads back a [`sim::RenderSnapshot`] to diff
//! against whatever it currently displays.

pub mod sim;
pub mod tuning;

pub use tuning::{CameraTuning, EmitterTuning, PlayerTuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz, one tick per frame)
    pub const TICK_DT: f32 = 1.0 / 30.0;

    /// World floor height; falling below it is fatal
    pub const WORLD_FLOOR_Y: f32 = 0.0;
}
