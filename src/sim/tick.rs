//! Per-tick simulation step
//!
//! One logical tick: input intents -> player state machine -> hazard
//! playback -> hazard hit check -> celebration update. The renderer reads a
//! snapshot afterwards; nothing here touches rendering.

use super::collision::{hazard_hit, standing_on};
use super::state::{Facing, GameState, MotionState, Pose};
use crate::consts::WORLD_FLOOR_Y;

/// Boolean input intents, sampled once per tick by the (external) window
/// layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub reset: bool,
}

/// Advance the simulation by one tick.
///
/// `dt_secs` is the frame delta; the state machine itself is per-tick, only
/// the celebration consumes wall time. A run that has ended (dead or
/// victorious) ignores everything except the reset intent.
pub fn tick(state: &mut GameState, input: &TickInput, dt_secs: f32) {
    if input.reset {
        state.reset();
    }

    let mut moving = false;
    if !state.player.is_dead() && !state.player.is_victorious() {
        moving = apply_input(state, input);
        apply_jump(state);
        apply_fall(state);
        update_camera(state);
        check_walked_off_edge(state);
    }

    advance_hazards(state);
    check_hazard_hits(state);
    update_pose(state, moving);

    if state.player.is_victorious() {
        state.celebration.update((dt_secs * 1000.0) as i64);
    }

    state.time_ticks += 1;
}

/// Horizontal movement, facing, and jump acceptance. Returns whether a
/// movement intent was held this tick. Left wins when both are held.
fn apply_input(state: &mut GameState, input: &TickInput) -> bool {
    let tuning = state.tuning;
    let player = &mut state.player;
    let mut moving = false;

    if input.move_left {
        player.position.z -= tuning.movement_speed;
        player.facing = Facing::Left;
        moving = true;
    } else if input.move_right {
        player.position.z += tuning.movement_speed;
        player.facing = Facing::Right;
        moving = true;
    }

    // Jump intents in any other state are silently ignored.
    if input.jump && player.motion == MotionState::Grounded {
        player.motion = MotionState::Jumping;
        player.jump_target = player.position.y + tuning.jump_height;
        log::debug!(
            "jump accepted at y {:.2}, apex {:.2}",
            player.position.y,
            player.jump_target
        );
    }

    moving
}

/// Rise until the apex is crossed, then tip into falling.
fn apply_jump(state: &mut GameState) {
    let player = &mut state.player;
    if player.motion == MotionState::Jumping {
        player.position.y += state.tuning.jump_speed;
        if player.position.y > player.jump_target {
            player.motion = MotionState::Falling;
        }
    }
}

/// Descend, land on the first platform that accepts, or die below the
/// world floor.
fn apply_fall(state: &mut GameState) {
    if state.player.motion != MotionState::Falling {
        return;
    }
    state.player.position.y -= state.tuning.fall_speed;
    try_land(state);
    if state.player.motion == MotionState::Falling && state.player.position.y < WORLD_FLOOR_Y {
        state.player.motion = MotionState::Dead;
        log::info!("fell below the world floor at tick {}", state.time_ticks);
    }
}

/// Platforms are checked in level order; the first edge-check hit snaps the
/// player onto its surface. The victory platform ends the run instead of
/// grounding.
fn try_land(state: &mut GameState) {
    let tuning = state.tuning;
    let player_pos = state.player.position;
    for platform in &state.level.platforms {
        if standing_on(
            player_pos,
            platform,
            tuning.edge_tolerance,
            tuning.bounding_radius_shrink,
        ) {
            state.player.position.y = platform.position.y + tuning.platform_height_offset;
            if platform.is_victory {
                state.player.motion = MotionState::Victorious;
                state.celebration.set_active(true);
                log::info!("victory at tick {}", state.time_ticks);
            } else {
                state.player.motion = MotionState::Grounded;
            }
            return;
        }
    }
}

/// Stepped height follow with a hysteresis band, clamped at the floor.
fn update_camera(state: &mut GameState) {
    let cam = state.camera_tuning;
    if state.player.position.y + cam.lead > state.camera.y {
        state.camera.y += cam.step;
    }
    if state.player.position.y < state.camera.y && state.camera.y != cam.floor {
        state.camera.y -= cam.step;
    }
}

/// Walking off an edge starts a fall without a jump.
fn check_walked_off_edge(state: &mut GameState) {
    if state.player.motion != MotionState::Grounded {
        return;
    }
    let tuning = state.tuning;
    let player_pos = state.player.position;
    let supported = state.level.platforms.iter().any(|platform| {
        standing_on(
            player_pos,
            platform,
            tuning.edge_tolerance,
            tuning.bounding_radius_shrink,
        )
    });
    if !supported {
        state.player.motion = MotionState::Falling;
        log::debug!("walked off an edge at z {:.2}", player_pos.z);
    }
}

fn advance_hazards(state: &mut GameState) {
    for hazard in &mut state.hazards {
        hazard.position = hazard.playback.tick();
    }
}

/// Any hazard inside the (scaled) player hit box kills, overriding
/// whatever else happened this tick. A finished run is untouchable.
fn check_hazard_hits(state: &mut GameState) {
    if state.player.is_dead() || state.player.is_victorious() {
        return;
    }
    let radius = state.level.player_bounds.for_pose(state.player.pose) * state.player.scale;
    let player_pos = state.player.position;
    let tolerance = state.tuning.hit_box_tolerance;
    let hit = state
        .hazards
        .iter()
        .any(|hazard| hazard_hit(hazard.position, player_pos, radius, tolerance));
    if hit {
        state.player.motion = MotionState::Dead;
        log::info!("struck by a cannon ball at tick {}", state.time_ticks);
    }
}

/// Derive the visual stance while grounded: stride the feet while moving,
/// stand facing the last direction otherwise. Pure presentation.
fn update_pose(state: &mut GameState, moving: bool) {
    let player = &mut state.player;
    if player.motion != MotionState::Grounded {
        return;
    }
    if moving {
        if player.stride_ticks > state.tuning.step_buffer {
            player.stride_ticks = 0;
            player.pose = match (player.left_foot_forward, player.facing) {
                (true, Facing::Left) => Pose::WalkLeftFacingLeft,
                (true, Facing::Right) => Pose::WalkLeftFacingRight,
                (false, Facing::Left) => Pose::WalkRightFacingLeft,
                (false, Facing::Right) => Pose::WalkRightFacingRight,
            };
            player.left_foot_forward = !player.left_foot_forward;
        }
        player.stride_ticks += 1;
    } else {
        player.pose = match player.facing {
            Facing::Left => Pose::StandingLeft,
            Facing::Right => Pose::StandingRight,
        };
    }
}
