//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per frame, strictly input -> update -> publish
//! - Seeded RNG only (particle jitter goes through an injected generator)
//! - No rendering or platform dependencies

pub mod bezier;
pub mod collision;
pub mod level;
pub mod particles;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use bezier::{sample_curve, sample_curve3};
pub use collision::{hazard_hit, ray_intersects_sphere, standing_on};
pub use level::{Level, Platform, PlayerBounds};
pub use particles::{Particle, ParticleEmitter};
pub use state::{
    Camera, EntityInstance, Facing, GameState, Hazard, MotionState, Overlay, OverlayKind, Player,
    Pose, RenderSnapshot,
};
pub use tick::{TickInput, tick};
pub use trajectory::{CurveSegment, TrajectoryPlayer, build_trajectory};
