//! Data-driven gameplay tuning
//!
//! Balance values live here, separate from level data: these tune how the
//! player moves and how forgiving the hazards are, not where things sit in
//! the world. Everything is serde-derived so a front end can load overrides
//! from JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Movement, jump, and collision tuning for the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Horizontal movement per tick (world units).
    pub movement_speed: f32,
    /// Vertical rise of a full jump.
    pub jump_height: f32,
    /// Vertical speed per tick while jumping.
    pub jump_speed: f32,
    /// Vertical speed per tick while falling.
    pub fall_speed: f32,
    /// Ray length for the platform edge check.
    pub edge_tolerance: f32,
    /// Multiplier (< 1) applied to platform bounding spheres.
    pub bounding_radius_shrink: f32,
    /// Y offset that places the player's feet on a platform surface.
    pub platform_height_offset: f32,
    /// Scales the squared player radius in hazard checks; > 1 enlarges the
    /// hit box.
    pub hit_box_tolerance: f32,
    /// Moving ticks between walk-cycle foot swaps.
    pub step_buffer: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            movement_speed: 0.45,
            jump_height: 16.0,
            jump_speed: 0.5,
            fall_speed: 0.5,
            edge_tolerance: 0.45,
            bounding_radius_shrink: 0.95,
            platform_height_offset: 1.85,
            hit_box_tolerance: 0.75,
            step_buffer: 12,
        }
    }
}

/// Stepped height-follow camera tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraTuning {
    /// Height change per adjustment.
    pub step: f32,
    /// How far the player may rise above the camera before it steps up.
    pub lead: f32,
    /// Lowest camera height; also the starting height.
    pub floor: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            step: 50.0,
            lead: 25.0,
            floor: 50.0,
        }
    }
}

/// Victory celebration emitter tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmitterTuning {
    /// Pool size; created all at once on first activation.
    pub max_particles: usize,
    /// Range of the spawn position perturbation (applied to all axes).
    pub position_rnd_range: f32,
    /// Range of the drift speed perturbation (applied to all axes).
    pub speed_rnd_range: f32,
    /// Range of the scale perturbation.
    pub scale_rnd_range: f32,
    /// Template particle scale.
    pub base_scale: f32,
    /// Template drift speed.
    pub base_speed: Vec3,
    /// Starting lifetime per particle in milliseconds.
    pub ttl_ms: i64,
}

impl Default for EmitterTuning {
    fn default() -> Self {
        Self {
            max_particles: 200,
            position_rnd_range: 12.0,
            speed_rnd_range: 12.0,
            scale_rnd_range: 0.0,
            base_scale: 0.5,
            base_speed: Vec3::new(0.0, 2.5, 0.0),
            ttl_ms: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_round_trips_through_json() {
        let tuning = PlayerTuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: PlayerTuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.jump_height, tuning.jump_height);
        assert_eq!(back.step_buffer, tuning.step_buffer);
    }

    #[test]
    fn overrides_apply_over_defaults() {
        let json = r#"{
            "movement_speed": 0.45, "jump_height": 20.0, "jump_speed": 0.5,
            "fall_speed": 0.5, "edge_tolerance": 0.45,
            "bounding_radius_shrink": 0.95, "platform_height_offset": 1.85,
            "hit_box_tolerance": 1.5, "step_buffer": 12
        }"#;
        let tuning: PlayerTuning = serde_json::from_str(json).unwrap();
        assert_eq!(tuning.jump_height, 20.0);
        assert_eq!(tuning.hit_box_tolerance, 1.5);
    }
}
