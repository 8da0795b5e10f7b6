//! Game state and render-facing output
//!
//! Owns the player, camera, hazards, and celebration emitter. The external
//! renderer never mutates any of this; it reads a [`RenderSnapshot`] each
//! tick and diffs it against whatever it currently displays.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{HAZARD_SCALE, Level};
use super::particles::ParticleEmitter;
use super::trajectory::{TrajectoryPlayer, build_trajectory};
use crate::tuning::{CameraTuning, EmitterTuning, PlayerTuning};

/// Which way the player faces; flips with horizontal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Visual stance tag. The renderer maps it to a mesh; it never affects
/// simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    StandingLeft,
    StandingRight,
    WalkLeftFacingLeft,
    WalkLeftFacingRight,
    WalkRightFacingLeft,
    WalkRightFacingRight,
}

impl Pose {
    pub fn is_standing(self) -> bool {
        matches!(self, Pose::StandingLeft | Pose::StandingRight)
    }
}

/// Player motion state. Exactly one holds at a time; `Dead` and
/// `Victorious` are terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    Grounded,
    Jumping,
    Falling,
    Dead,
    Victorious,
}

/// The player entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub scale: f32,
    pub facing: Facing,
    pub pose: Pose,
    pub motion: MotionState,
    /// Y the current jump tops out at.
    pub(crate) jump_target: f32,
    /// Moving ticks since the last foot swap.
    pub(crate) stride_ticks: u32,
    pub(crate) left_foot_forward: bool,
}

impl Player {
    fn at_start(start: Vec3, step_buffer: u32) -> Self {
        Self {
            position: start,
            scale: 1.0,
            facing: Facing::Right,
            pose: Pose::StandingRight,
            motion: MotionState::Grounded,
            jump_target: 0.0,
            stride_ticks: step_buffer,
            left_foot_forward: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.motion == MotionState::Dead
    }

    pub fn is_victorious(&self) -> bool {
        self.motion == MotionState::Victorious
    }
}

/// Height-follow camera. Steps up and down in fixed increments, never
/// below the floor height; a hysteresis band, not interpolation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub y: f32,
}

/// A scripted hazard: cyclic trajectory playback plus the position the
/// renderer and the hit check both read.
#[derive(Debug, Clone)]
pub struct Hazard {
    pub(crate) playback: TrajectoryPlayer,
    pub position: Vec3,
    pub scale: f32,
}

/// Position + scale pair the renderer places a mesh at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityInstance {
    pub position: Vec3,
    pub scale: f32,
}

/// What the renderer shows when a run has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    GameOver,
    Victory,
}

/// End-state overlay placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub position: Vec3,
}

/// Declarative per-tick output for the external renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub player_position: Vec3,
    pub player_scale: f32,
    pub pose: Pose,
    pub hazards: Vec<EntityInstance>,
    pub particles: Vec<EntityInstance>,
    pub is_dead: bool,
    pub is_victorious: bool,
    pub camera_y: f32,
    pub overlay: Option<Overlay>,
}

/// Game-over overlay anchor before the camera-height adjustment.
const GAME_OVER_ANCHOR: Vec3 = Vec3::new(-15.0, 70.0, 65.0);

/// Height of the victory overlay above the victory platform.
const VICTORY_OVERLAY_LIFT: f32 = 25.0;

/// Z plane both overlays sit on.
const OVERLAY_Z: f32 = 65.0;

/// Complete simulation state for one run.
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub tuning: PlayerTuning,
    pub camera_tuning: CameraTuning,
    pub level: Level,
    pub player: Player,
    pub camera: Camera,
    pub hazards: Vec<Hazard>,
    pub celebration: ParticleEmitter,
    pub time_ticks: u64,
}

impl GameState {
    /// Build a run from a level with default tuning.
    pub fn new(level: Level, seed: u64) -> Self {
        Self::with_tuning(
            level,
            seed,
            PlayerTuning::default(),
            CameraTuning::default(),
            EmitterTuning::default(),
        )
    }

    pub fn with_tuning(
        level: Level,
        seed: u64,
        tuning: PlayerTuning,
        camera_tuning: CameraTuning,
        emitter_tuning: EmitterTuning,
    ) -> Self {
        let hazards: Vec<Hazard> = level
            .hazard_paths
            .iter()
            .map(|path| {
                let playback = TrajectoryPlayer::new(build_trajectory(path.segments, path.origin));
                Hazard {
                    position: playback.current(),
                    playback,
                    scale: HAZARD_SCALE,
                }
            })
            .collect();

        // The celebration template is anchored at the victory platform.
        let anchor = level
            .victory_platform()
            .map(|p| p.position)
            .unwrap_or(Vec3::ZERO);
        let celebration =
            ParticleEmitter::new(anchor, emitter_tuning, Pcg32::seed_from_u64(seed));

        log::info!(
            "level ready: {} platforms, {} hazards, seed {seed}",
            level.platforms.len(),
            hazards.len()
        );

        Self {
            seed,
            tuning,
            camera_tuning,
            player: Player::at_start(level.player_start, tuning.step_buffer),
            camera: Camera {
                y: camera_tuning.floor,
            },
            level,
            hazards,
            celebration,
            time_ticks: 0,
        }
    }

    /// Restore all owned state to its initial configuration within one tick
    /// boundary: player to the start, hazard playback to index 0, pool
    /// cleared and re-armed. Safe to call any number of times.
    pub fn reset(&mut self) {
        self.player = Player::at_start(self.level.player_start, self.tuning.step_buffer);
        self.camera.y = self.camera_tuning.floor;
        for hazard in &mut self.hazards {
            hazard.playback.reset();
            hazard.position = hazard.playback.current();
        }
        self.celebration.reset();
        log::info!("game reset at tick {}", self.time_ticks);
    }

    /// The declarative frame output the renderer diffs against.
    pub fn snapshot(&self) -> RenderSnapshot {
        let overlay = match self.player.motion {
            MotionState::Dead => Some(Overlay {
                kind: OverlayKind::GameOver,
                position: GAME_OVER_ANCHOR
                    + Vec3::new(0.0, self.camera.y - self.camera_tuning.floor, 0.0),
            }),
            MotionState::Victorious => self.level.victory_platform().map(|platform| Overlay {
                kind: OverlayKind::Victory,
                position: Vec3::new(
                    0.0,
                    platform.position.y + VICTORY_OVERLAY_LIFT,
                    OVERLAY_Z,
                ),
            }),
            _ => None,
        };

        RenderSnapshot {
            player_position: self.player.position,
            player_scale: self.player.scale,
            pose: self.player.pose,
            hazards: self
                .hazards
                .iter()
                .map(|h| EntityInstance {
                    position: h.position,
                    scale: h.scale,
                })
                .collect(),
            particles: self
                .celebration
                .particles()
                .iter()
                .map(|p| EntityInstance {
                    position: p.position,
                    scale: p.scale,
                })
                .collect(),
            is_dead: self.player.is_dead(),
            is_victorious: self.player.is_victorious(),
            camera_y: self.camera.y,
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn new_run_starts_grounded_at_the_level_start() {
        let state = GameState::new(Level::tower(), 1);
        assert_eq!(state.player.motion, MotionState::Grounded);
        assert_eq!(state.player.position, Vec3::new(0.0, 1.85, 0.0));
        assert_eq!(state.camera.y, 50.0);
        assert_eq!(state.hazards.len(), 3);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut once = GameState::new(Level::tower(), 9);
        let mut twice = GameState::new(Level::tower(), 9);

        let input = TickInput {
            move_right: true,
            jump: true,
            ..TickInput::default()
        };
        for state in [&mut once, &mut twice] {
            for _ in 0..40 {
                tick(state, &input, 1.0 / 30.0);
            }
        }

        once.reset();
        twice.reset();
        twice.reset();

        assert_eq!(once.player.position, twice.player.position);
        assert_eq!(once.player.motion, twice.player.motion);
        assert_eq!(once.camera.y, twice.camera.y);
        for (a, b) in once.hazards.iter().zip(&twice.hazards) {
            assert_eq!(a.playback.index(), 0);
            assert_eq!(b.playback.index(), 0);
            assert_eq!(a.position, b.position);
        }
        assert!(once.celebration.particles().is_empty());
        assert!(twice.celebration.particles().is_empty());
    }

    #[test]
    fn snapshot_places_the_game_over_overlay_relative_to_the_camera() {
        let mut state = GameState::new(Level::tower(), 2);
        state.player.motion = MotionState::Dead;
        state.camera.y = 150.0;
        let snapshot = state.snapshot();
        assert!(snapshot.is_dead);
        let overlay = snapshot.overlay.expect("dead run must show an overlay");
        assert_eq!(overlay.kind, OverlayKind::GameOver);
        assert_eq!(overlay.position, Vec3::new(-15.0, 170.0, 65.0));
    }

    #[test]
    fn snapshot_places_the_victory_overlay_above_the_summit() {
        let mut state = GameState::new(Level::tower(), 2);
        state.player.motion = MotionState::Victorious;
        let snapshot = state.snapshot();
        assert!(snapshot.is_victorious);
        let overlay = snapshot.overlay.expect("victory must show an overlay");
        assert_eq!(overlay.kind, OverlayKind::Victory);
        assert_eq!(overlay.position, Vec3::new(0.0, 295.0, 65.0));
    }

    #[test]
    fn snapshot_serializes() {
        let state = GameState::new(Level::tower(), 3);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("player_position"));
    }
}
