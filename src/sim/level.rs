//! Built-in level data
//!
//! Platform layout, hazard curve tables, and the mesh bounds the collision
//! math needs. All of it is fixed contract data: the numbers live in named
//! tables so they can be inspected and tested without digging through setup
//! code. Anything mesh-shaped here is a bounding value supplied by the
//! (external) asset layer; nothing in this crate renders.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::state::Pose;
use super::trajectory::CurveSegment;

/// Bounding radius of the platform mesh before scaling (asset data).
pub const PLATFORM_MESH_RADIUS: f32 = 80.0;

/// Uniform scale applied to every platform in the tower.
pub const PLATFORM_SCALE: f32 = 0.125;

/// Scale applied to each cannon ball.
pub const HAZARD_SCALE: f32 = 0.5;

/// A static platform. Immutable once the level is assembled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub position: Vec3,
    pub scale: f32,
    /// Unscaled mesh bounding radius; collision shrinks `scale * radius`.
    pub mesh_radius: f32,
    /// Landing here wins the game.
    pub is_victory: bool,
}

impl Platform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            scale: PLATFORM_SCALE,
            mesh_radius: PLATFORM_MESH_RADIUS,
            is_victory: false,
        }
    }
}

/// Player mesh bounding radii per pose family (asset data; collision is the
/// only consumer).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBounds {
    pub standing: f32,
    pub walking: f32,
}

impl PlayerBounds {
    /// Bounding radius for the given pose tag.
    pub fn for_pose(&self, pose: Pose) -> f32 {
        if pose.is_standing() {
            self.standing
        } else {
            self.walking
        }
    }
}

impl Default for PlayerBounds {
    fn default() -> Self {
        Self {
            standing: 2.0,
            walking: 2.0,
        }
    }
}

/// A hazard's full path: curve segments plus the world origin its samples
/// are lifted to.
#[derive(Debug, Clone, Copy)]
pub struct HazardPath {
    pub segments: &'static [CurveSegment],
    pub origin: Vec3,
}

/// Bottom cannon ball: a short hop, then a long arc falling away to +z.
/// The second segment runs to t = 2 on purpose; its period differs from
/// the top ball's so the hazards drift out of phase.
pub const BOTTOM_BALL_PATH: HazardPath = HazardPath {
    segments: &[
        CurveSegment {
            control: [
                Vec2::new(0.0, 0.0),
                Vec2::new(8.0, 4.0),
                Vec2::new(17.0, 2.0),
                Vec2::new(30.0, -18.0),
            ],
            t_start: 0.0,
            t_end: 1.0,
            t_step: 0.01,
        },
        CurveSegment {
            control: [
                Vec2::new(30.0, -18.0),
                Vec2::new(36.0, -10.0),
                Vec2::new(47.0, -5.0),
                Vec2::new(65.0, -24.0),
            ],
            t_start: 0.0,
            t_end: 2.0,
            t_step: 0.01,
        },
    ],
    origin: Vec3::new(1.0, 65.0, 83.0),
};

/// Mid cannon ball: the bottom path mirrored to fire toward -z.
pub const MID_BALL_PATH: HazardPath = HazardPath {
    segments: &[
        CurveSegment {
            control: [
                Vec2::new(0.0, 0.0),
                Vec2::new(-8.0, 4.0),
                Vec2::new(-17.0, 2.0),
                Vec2::new(-30.0, -18.0),
            ],
            t_start: 0.0,
            t_end: 1.0,
            t_step: 0.01,
        },
        CurveSegment {
            control: [
                Vec2::new(-30.0, -18.0),
                Vec2::new(-36.0, -10.0),
                Vec2::new(-47.0, -5.0),
                Vec2::new(-65.0, -24.0),
            ],
            t_start: 0.0,
            t_end: 2.0,
            t_step: 0.01,
        },
    ],
    origin: Vec3::new(1.0, 124.5, 80.0),
};

/// Top cannon ball: three bounces along the summit approach.
pub const TOP_BALL_PATH: HazardPath = HazardPath {
    segments: &[
        CurveSegment {
            control: [
                Vec2::new(0.0, 0.0),
                Vec2::new(15.0, 6.0),
                Vec2::new(27.0, 2.0),
                Vec2::new(40.0, -33.0),
            ],
            t_start: 0.0,
            t_end: 1.0,
            t_step: 0.01,
        },
        CurveSegment {
            control: [
                Vec2::new(40.0, -33.0),
                Vec2::new(57.0, -5.0),
                Vec2::new(65.0, -5.0),
                Vec2::new(75.0, -47.0),
            ],
            t_start: 0.0,
            t_end: 1.0,
            t_step: 0.01,
        },
        CurveSegment {
            control: [
                Vec2::new(75.0, -47.0),
                Vec2::new(95.0, -35.0),
                Vec2::new(115.0, -25.0),
                Vec2::new(135.0, -45.0),
            ],
            t_start: 0.0,
            t_end: 1.5,
            t_step: 0.01,
        },
    ],
    origin: Vec3::new(1.0, 229.0, 80.0),
};

/// (y, z) positions of the tower platforms, ground to summit. All sit on
/// the x = 0 plane.
const TOWER_PLATFORMS: &[(f32, f32)] = &[
    // first climb, drifting away from the start
    (0.0, 0.0),
    (15.0, 40.0),
    (30.0, 80.0),
    (45.0, 120.0),
    (60.0, 160.0),
    // switchback descent toward z = 0
    (75.0, 120.0),
    (90.0, 80.0),
    (105.0, 40.0),
    (120.0, 0.0),
    // second climb
    (135.0, 40.0),
    (150.0, 80.0),
    (165.0, 120.0),
    (180.0, 160.0),
    // flat rest row, then the lone step at z = 0
    (195.0, 120.0),
    (195.0, 80.0),
    (195.0, 40.0),
    (210.0, 0.0),
    // summit approach
    (225.0, 40.0),
    (240.0, 80.0),
    (255.0, 40.0),
];

/// (y, z) positions of the cannon pedestal platforms.
const CANNON_PLATFORMS: &[(f32, f32)] = &[(60.0, 80.0), (120.0, 80.0), (225.0, 80.0)];

/// Victory platform position (the summit).
const VICTORY_PLATFORM: (f32, f32) = (270.0, 80.0);

/// A fully-assembled level. Trusted data; validation belongs to the loader
/// that produced it.
#[derive(Debug, Clone)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub hazard_paths: Vec<HazardPath>,
    pub player_start: Vec3,
    pub player_bounds: PlayerBounds,
}

impl Level {
    /// The built-in tower level: a zig-zag ladder of platforms, three
    /// cannons, and the victory platform at the summit.
    pub fn tower() -> Self {
        let mut platforms: Vec<Platform> = TOWER_PLATFORMS
            .iter()
            .chain(CANNON_PLATFORMS)
            .map(|&(y, z)| Platform::new(Vec3::new(0.0, y, z)))
            .collect();

        let mut summit = Platform::new(Vec3::new(0.0, VICTORY_PLATFORM.0, VICTORY_PLATFORM.1));
        summit.is_victory = true;
        platforms.push(summit);

        let level = Self {
            platforms,
            hazard_paths: vec![BOTTOM_BALL_PATH, MID_BALL_PATH, TOP_BALL_PATH],
            player_start: Vec3::new(0.0, 1.85, 0.0),
            player_bounds: PlayerBounds::default(),
        };
        log::debug!(
            "tower level: {} platforms, {} hazards",
            level.platforms.len(),
            level.hazard_paths.len()
        );
        level
    }

    pub fn victory_platform(&self) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.is_victory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::trajectory::build_trajectory;

    #[test]
    fn tower_has_exactly_one_victory_platform() {
        let level = Level::tower();
        let victors: Vec<_> = level.platforms.iter().filter(|p| p.is_victory).collect();
        assert_eq!(victors.len(), 1);
        assert_eq!(victors[0].position, Vec3::new(0.0, 270.0, 80.0));
    }

    #[test]
    fn tower_platform_count() {
        // 20 tower steps + 3 cannon pedestals + the summit.
        assert_eq!(Level::tower().platforms.len(), 24);
    }

    #[test]
    fn hazard_periods_are_the_designed_lengths() {
        let bottom = build_trajectory(BOTTOM_BALL_PATH.segments, BOTTOM_BALL_PATH.origin);
        let mid = build_trajectory(MID_BALL_PATH.segments, MID_BALL_PATH.origin);
        let top = build_trajectory(TOP_BALL_PATH.segments, TOP_BALL_PATH.origin);
        assert_eq!(bottom.len(), 300);
        assert_eq!(mid.len(), 300);
        assert_eq!(top.len(), 350);
        // Unequal periods make the relative phase of the balls drift.
        assert_ne!(bottom.len(), top.len());
    }

    #[test]
    fn hazard_paths_open_at_their_muzzles() {
        let bottom = build_trajectory(BOTTOM_BALL_PATH.segments, BOTTOM_BALL_PATH.origin);
        assert_eq!(bottom[0], Vec3::new(1.0, 65.0, 83.0));
        let top = build_trajectory(TOP_BALL_PATH.segments, TOP_BALL_PATH.origin);
        assert_eq!(top[0], Vec3::new(1.0, 229.0, 80.0));
    }

    #[test]
    fn player_starts_on_the_first_platform() {
        let level = Level::tower();
        let first = &level.platforms[0];
        assert!(crate::sim::collision::standing_on(
            level.player_start,
            first,
            0.45,
            0.95
        ));
    }
}
